use crate::common::error::WalkResult;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

pub type Discrete = i32;
pub type Continous = f64;

/// Auxiliary diagnostics returned with every observation. Always empty for now.
pub type Info = Map<String, Value>;

/// Refer: https://gymnasium.farama.org/api/spaces/fundamental/#discrete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscreteSpace {
    pub n: Discrete,
}

impl DiscreteSpace {
    pub fn contains(&self, x: Discrete) -> bool {
        (0..self.n).contains(&x)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Discrete {
        rng.gen_range(0..self.n)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepInfo {
    pub observation: Discrete,
    pub reward: Continous,
    pub terminated: bool,
    pub truncated: bool,
    pub info: Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next_state: Discrete,
    pub probability: Continous,
    pub reward: Continous,
    pub done: bool,
}

/// Keyed by `(state, action)`.
pub type Transitions = HashMap<(Discrete, Discrete), Vec<Transition>>;

/// One entry of an episode: the state entered and the reward received entering it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpisodeEvent {
    pub s: Discrete,
    pub r: Continous,
}

pub trait Policy {
    fn policy(&self, s: Discrete) -> Discrete;
}

pub trait EpisodeGenerator {
    fn generate(&self, n: usize, seed: Option<u64>) -> WalkResult<Vec<Vec<EpisodeEvent>>>;
}
