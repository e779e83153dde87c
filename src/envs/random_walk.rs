use super::Env;
use crate::common::config::RandomWalkConfig;
use crate::common::defs::{Continous, Discrete, Info, StepInfo};
use crate::common::error::{WalkError, WalkResult};
use crate::common::rewards::RewardTable;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Left = 0,
    Right = 1,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::Left, Action::Right];
}

impl TryFrom<Discrete> for Action {
    type Error = WalkError;

    fn try_from(value: Discrete) -> WalkResult<Self> {
        match value {
            0 => Ok(Action::Left),
            1 => Ok(Action::Right),
            v => Err(WalkError::InvalidAction(v)),
        }
    }
}

impl From<Action> for Discrete {
    fn from(action: Action) -> Self {
        action as Discrete
    }
}

/// Read-only view handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot<'a> {
    pub state: Discrete,
    pub non_terminal_state_count: Discrete,
    pub rewards: &'a RewardTable,
}

impl Snapshot<'_> {
    pub fn terminal_state(&self) -> Discrete {
        self.non_terminal_state_count
    }
}

/// Next state of the walk, `n` being the number of interior states.
///
/// Leaving state 0 to the left and leaving state `n - 1` to the right both land
/// in the terminal sentinel `n`. Right from the sentinel stays there; left from
/// it is not a transition of the walk and also yields the sentinel.
pub fn next_state(n: Discrete, curr: Discrete, action: Action) -> Discrete {
    match action {
        _ if curr == n => n,
        Action::Left if curr == 0 => n,
        Action::Left => curr - 1,
        Action::Right => curr + 1,
    }
}

/// One dimensional random walk, Sutton & Barto 2018, example 6.2.
///
/// States `0..n` are interior, `n` is the single terminal state reached from
/// either boundary. Transitions are deterministic; the randomness lives in the
/// policy choosing actions. Stepping a terminated episode is an error until the
/// next [`Env::reset`].
#[derive(Debug, Clone)]
pub struct RandomWalk {
    config: RandomWalkConfig,
    state: Discrete,
}

impl RandomWalk {
    pub fn new(config: RandomWalkConfig) -> WalkResult<Self> {
        config.validate()?;
        debug!(
            non_terminal_state_count = config.non_terminal_state_count,
            start_state = config.start_state,
            rewards = config.rewards.len(),
            "Created random walk."
        );

        Ok(Self {
            state: config.start_state,
            config,
        })
    }

    pub fn from_json(json: &str) -> WalkResult<Self> {
        Self::new(RandomWalkConfig::from_json(json)?)
    }

    pub fn non_terminal_state_count(&self) -> Discrete {
        self.config.non_terminal_state_count
    }

    pub fn start_state(&self) -> Discrete {
        self.config.start_state
    }

    pub fn terminal_state(&self) -> Discrete {
        self.config.terminal_state()
    }

    pub fn rewards(&self) -> &RewardTable {
        &self.config.rewards
    }

    pub fn is_terminal(&self) -> bool {
        self.state == self.terminal_state()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            state: self.state,
            non_terminal_state_count: self.non_terminal_state_count(),
            rewards: self.rewards(),
        }
    }

    /// Step with the integer action encoding: 0 is left, 1 is right.
    pub fn step_discrete(&mut self, action: Discrete) -> WalkResult<StepInfo> {
        let action = Action::try_from(action).inspect_err(|_| {
            warn!(action, "Rejected invalid action.");
        })?;

        self.step(action)
    }

    fn reward(&self, from: Discrete, to: Discrete) -> Continous {
        self.config.rewards.get(from, to)
    }
}

impl Default for RandomWalk {
    fn default() -> Self {
        let config = RandomWalkConfig::default();
        Self {
            state: config.start_state,
            config,
        }
    }
}

impl Env for RandomWalk {
    type Action = Action;
    type Config = RandomWalkConfig;

    fn reset(&mut self) -> (Discrete, Info) {
        self.state = self.config.start_state;
        debug!(state = self.state, "Reset random walk.");

        (self.state, Info::new())
    }

    fn step(&mut self, action: Action) -> WalkResult<StepInfo> {
        let curr = self.state;
        if self.is_terminal() {
            warn!(state = curr, ?action, "Step called on a terminated episode.");
            return Err(WalkError::EpisodeTerminated(curr));
        }

        let next = next_state(self.non_terminal_state_count(), curr, action);
        let reward = self.reward(curr, next);
        let terminated = next == self.terminal_state();
        self.state = next;
        trace!(from = curr, ?action, to = next, reward, terminated, "Stepped.");

        Ok(StepInfo {
            observation: next,
            reward,
            terminated,
            truncated: false,
            info: Info::new(),
        })
    }

    fn state(&self) -> Discrete {
        self.state
    }

    fn config(&self) -> &RandomWalkConfig {
        &self.config
    }
}
