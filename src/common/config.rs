use crate::common::defs::Discrete;
use crate::common::error::{WalkError, WalkResult};
use crate::common::rewards::RewardTable;
use serde::{Deserialize, Serialize};

/// Construction options of a random walk. Immutable once an environment owns it.
///
/// Any subset of fields may be given in JSON; the rest fall back to the defaults
/// of 5 interior states, start state 2 and an empty reward table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RandomWalkConfig {
    pub non_terminal_state_count: Discrete,
    pub start_state: Discrete,
    pub rewards: RewardTable,
}

impl Default for RandomWalkConfig {
    fn default() -> Self {
        Self {
            non_terminal_state_count: 5,
            start_state: 2,
            rewards: RewardTable::new(),
        }
    }
}

impl RandomWalkConfig {
    pub fn new(non_terminal_state_count: Discrete, start_state: Discrete, rewards: RewardTable) -> Self {
        Self {
            non_terminal_state_count,
            start_state,
            rewards,
        }
    }

    pub fn from_json(json: &str) -> WalkResult<Self> {
        serde_json::from_str(json).map_err(|e| WalkError::Config(e.to_string()))
    }

    /// The sentinel index reached by leaving either boundary.
    pub fn terminal_state(&self) -> Discrete {
        self.non_terminal_state_count
    }

    pub fn validate(&self) -> WalkResult<()> {
        let n = self.non_terminal_state_count;
        // n + 1 states, terminal included, must stay representable.
        if !(1..Discrete::MAX).contains(&n) {
            return Err(WalkError::InvalidStateCount(n));
        }

        if !(0..n).contains(&self.start_state) {
            return Err(WalkError::InvalidStartState {
                start_state: self.start_state,
                non_terminal_state_count: n,
            });
        }

        let terminal_state = self.terminal_state();
        if let Some(((from, to), _)) = self
            .rewards
            .iter()
            .find(|((from, to), _)| !(0..=terminal_state).contains(from) || !(0..=terminal_state).contains(to))
        {
            return Err(WalkError::InvalidRewardTransition {
                from,
                to,
                terminal_state,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn defaults_are_valid() {
        let c = RandomWalkConfig::default();

        assert_eq!(c.non_terminal_state_count, 5);
        assert_eq!(c.start_state, 2);
        assert!(c.rewards.is_empty());
        assert_eq!(c.terminal_state(), 5);
        assert_eq!(c.validate(), Ok(()));
    }

    #[rstest]
    #[case(5, -1)]
    #[case(5, 5)]
    #[case(1, 1)]
    fn rejects_start_state_out_of_range(#[case] n: Discrete, #[case] start: Discrete) {
        let c = RandomWalkConfig::new(n, start, RewardTable::new());

        assert_eq!(
            c.validate(),
            Err(WalkError::InvalidStartState {
                start_state: start,
                non_terminal_state_count: n,
            })
        );
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    #[case(Discrete::MAX)]
    fn rejects_state_count_out_of_range(#[case] n: Discrete) {
        let c = RandomWalkConfig::new(n, 0, RewardTable::new());

        assert_eq!(c.validate(), Err(WalkError::InvalidStateCount(n)));
    }

    #[test]
    fn accepts_largest_state_count() {
        let c = RandomWalkConfig::new(Discrete::MAX - 1, 0, RewardTable::new());

        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn rejects_unreachable_reward_keys() {
        let c = RandomWalkConfig::new(5, 2, RewardTable::new().with(4, 6, 1.));

        assert_eq!(
            c.validate(),
            Err(WalkError::InvalidRewardTransition {
                from: 4,
                to: 6,
                terminal_state: 5,
            })
        );
    }

    #[test]
    fn parses_partial_json() {
        let c = RandomWalkConfig::from_json(
            r#"{ "start_state": 3, "rewards": [{ "from": 4, "to": 5, "reward": 1.0 }] }"#,
        )
        .unwrap();

        assert_eq!(c.non_terminal_state_count, 5);
        assert_eq!(c.start_state, 3);
        assert_eq!(c.rewards, RewardTable::from([((4, 5), 1.)]));
    }

    #[test]
    fn reports_malformed_json() {
        let e = RandomWalkConfig::from_json(r#"{ "start_stat": 3 }"#).unwrap_err();

        assert!(matches!(e, WalkError::Config(_)));
    }

    #[test]
    fn parse_errors_keep_position() {
        let e = RandomWalkConfig::from_json("{\n  \"start_state\": true\n}").unwrap_err();

        assert!(e.to_string().contains("line 2 column"), "{e}");
    }
}
