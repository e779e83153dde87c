use crate::common::config::RandomWalkConfig;
use crate::common::defs::*;
use crate::common::error::WalkResult;
use crate::envs::random_walk::{next_state, Action, RandomWalk};
use crate::envs::Env;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Markov Decision Process - Sutton & Barto 2018.
pub trait Mdp {
    fn n_s(&self) -> usize;

    fn n_a(&self) -> usize;

    fn transitions(&self) -> Rc<Transitions>;

    fn observation_space(&self) -> DiscreteSpace {
        DiscreteSpace {
            n: self.n_s() as Discrete,
        }
    }

    fn action_space(&self) -> DiscreteSpace {
        DiscreteSpace {
            n: self.n_a() as Discrete,
        }
    }
}

impl Mdp for RandomWalk {
    /// Interior states plus the terminal sentinel.
    fn n_s(&self) -> usize {
        self.non_terminal_state_count() as usize + 1
    }

    fn n_a(&self) -> usize {
        Action::ALL.len()
    }

    /// The terminal state is absorbing and has no outgoing entries.
    fn transitions(&self) -> Rc<Transitions> {
        let n = self.non_terminal_state_count();
        let transitions: Transitions = (0..n)
            .flat_map(|s| Action::ALL.map(|a| (s, a)))
            .map(|(s, a)| {
                let s_next = next_state(n, s, a);
                let t = Transition {
                    next_state: s_next,
                    probability: 1.,
                    reward: self.rewards().get(s, s_next),
                    done: s_next == n,
                };
                ((s, Discrete::from(a)), vec![t])
            })
            .collect();

        Rc::new(transitions)
    }
}

/// Uniform policy over a discrete action space.
pub struct RandomPolicy {
    space: DiscreteSpace,
    rng: RefCell<StdRng>,
}

impl RandomPolicy {
    pub fn new(space: DiscreteSpace, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            space,
            rng: RefCell::new(rng),
        }
    }
}

impl Policy for RandomPolicy {
    fn policy(&self, _s: Discrete) -> Discrete {
        self.space.sample(&mut *self.rng.borrow_mut())
    }
}

/// Run one episode from a fresh reset.
///
/// The first event is the start state with reward 0; every later event is the
/// state entered and the reward received entering it. Stops on termination or
/// after `max_steps` steps, whichever comes first.
pub fn rollout(
    env: &mut RandomWalk,
    policy: &dyn Policy,
    max_steps: Option<usize>,
) -> WalkResult<Vec<EpisodeEvent>> {
    let (s, _) = env.reset();
    let mut episode = vec![EpisodeEvent { s, r: 0. }];

    let mut s = s;
    while max_steps.map_or(true, |m| episode.len() <= m) {
        let si = env.step_discrete(policy.policy(s))?;
        episode.push(EpisodeEvent {
            s: si.observation,
            r: si.reward,
        });

        if si.terminated || si.truncated {
            break;
        }
        s = si.observation;
    }

    Ok(episode)
}

/// Random-policy episodes of a random walk, reproducible by seed.
pub struct RandomWalkEpisodes {
    pub config: RandomWalkConfig,
    pub max_steps: Option<usize>,
}

impl RandomWalkEpisodes {
    pub fn new(config: RandomWalkConfig, max_steps: Option<usize>) -> Self {
        Self { config, max_steps }
    }
}

impl EpisodeGenerator for RandomWalkEpisodes {
    fn generate(&self, n: usize, seed: Option<u64>) -> WalkResult<Vec<Vec<EpisodeEvent>>> {
        let mut env = RandomWalk::new(self.config.clone())?;
        let policy = RandomPolicy::new(env.action_space(), seed);

        let episodes = (0..n)
            .map(|_| rollout(&mut env, &policy, self.max_steps))
            .collect::<WalkResult<Vec<_>>>()?;
        debug!(
            episodes = episodes.len(),
            steps = episodes.iter().map(|ep| ep.len() - 1).sum::<usize>(),
            "Generated episodes."
        );

        Ok(episodes)
    }
}
