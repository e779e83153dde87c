extern crate rand;
extern crate serde;
extern crate serde_json;

pub mod common;
pub mod envs;
pub mod mdps;
pub mod render;

pub use common::config::RandomWalkConfig;
pub use common::defs::*;
pub use common::error::{WalkError, WalkResult};
pub use common::rewards::{RewardTable, DEFAULT_REWARD};
pub use envs::random_walk::{Action, RandomWalk, Snapshot};
pub use envs::Env;
