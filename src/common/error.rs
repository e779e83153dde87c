use crate::common::defs::Discrete;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WalkError {
    #[error("Non-terminal state count must be at least 1 and below i32::MAX, got {0}.")]
    InvalidStateCount(Discrete),

    #[error("Start state {start_state} is outside [0, {non_terminal_state_count}).")]
    InvalidStartState {
        start_state: Discrete,
        non_terminal_state_count: Discrete,
    },

    #[error("Reward transition ({from}, {to}) is outside [0, {terminal_state}].")]
    InvalidRewardTransition {
        from: Discrete,
        to: Discrete,
        terminal_state: Discrete,
    },

    #[error("Invalid action {0}: expected 0 (left) or 1 (right).")]
    InvalidAction(Discrete),

    #[error("Episode already terminated in state {0}. Call reset before stepping.")]
    EpisodeTerminated(Discrete),

    /// Parse failure, message includes the line and column reported by the parser.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type WalkResult<T> = Result<T, WalkError>;
