use crate::common::defs::{Continous, Discrete};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reward for any `(from, to)` pair not present in a [`RewardTable`].
pub const DEFAULT_REWARD: Continous = 0.;

/// Sparse reward function over ordered `(from, to)` state pairs.
///
/// Lookups never fail: a pair without an explicit entry yields [`DEFAULT_REWARD`].
/// `(a, b)` and `(b, a)` are distinct keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<RewardEntry>", into = "Vec<RewardEntry>")]
pub struct RewardTable {
    rewards: HashMap<(Discrete, Discrete), Continous>,
}

/// Serialized form of a single reward table entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardEntry {
    pub from: Discrete,
    pub to: Discrete,
    pub reward: Continous,
}

impl RewardTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, from: Discrete, to: Discrete, reward: Continous) -> Option<Continous> {
        self.rewards.insert((from, to), reward)
    }

    pub fn with(mut self, from: Discrete, to: Discrete, reward: Continous) -> Self {
        self.insert(from, to, reward);
        self
    }

    pub fn get(&self, from: Discrete, to: Discrete) -> Continous {
        self.explicit(from, to).unwrap_or(DEFAULT_REWARD)
    }

    pub fn explicit(&self, from: Discrete, to: Discrete) -> Option<Continous> {
        self.rewards.get(&(from, to)).copied()
    }

    /// Entries ordered by `(from, to)`.
    pub fn iter(&self) -> impl Iterator<Item = ((Discrete, Discrete), Continous)> + '_ {
        self.rewards
            .iter()
            .map(|(&k, &r)| (k, r))
            .sorted_by_key(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }
}

impl FromIterator<((Discrete, Discrete), Continous)> for RewardTable {
    fn from_iter<I: IntoIterator<Item = ((Discrete, Discrete), Continous)>>(iter: I) -> Self {
        Self {
            rewards: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[((Discrete, Discrete), Continous); N]> for RewardTable {
    fn from(entries: [((Discrete, Discrete), Continous); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<Vec<RewardEntry>> for RewardTable {
    fn from(entries: Vec<RewardEntry>) -> Self {
        entries
            .into_iter()
            .map(|e| ((e.from, e.to), e.reward))
            .collect()
    }
}

impl From<RewardTable> for Vec<RewardEntry> {
    fn from(table: RewardTable) -> Self {
        table
            .iter()
            .map(|((from, to), reward)| RewardEntry { from, to, reward })
            .collect()
    }
}
