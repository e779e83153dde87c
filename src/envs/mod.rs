pub mod random_walk;

use crate::common::defs::{Discrete, Info, StepInfo};
use crate::common::error::WalkResult;

/// Episodic environment driven by a single sequential caller.
pub trait Env {
    type Action;
    type Config;

    /// Start a new episode, discarding any episode in progress.
    fn reset(&mut self) -> (Discrete, Info);

    fn step(&mut self, action: Self::Action) -> WalkResult<StepInfo>;

    fn state(&self) -> Discrete;

    fn config(&self) -> &Self::Config;
}
