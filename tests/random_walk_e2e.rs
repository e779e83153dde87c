extern crate assertor;
extern crate float_eq;
extern crate random_walk;
extern crate rstest;
mod common;

use assertor::*;
use common::*;
use float_eq::*;
use random_walk::*;
use rstest::*;

#[test]
fn scenario_right_then_left_e2e() {
    let env = &mut scenario_env();

    let (s, info) = env.reset();
    assert_eq!(s, 2);
    assert!(info.is_empty());

    let si = env.step_discrete(1).unwrap();
    assert_that!(step_tuple(&si)).is_equal_to((3, 0., false, false));
    assert!(si.info.is_empty());

    let si = env.step_discrete(1).unwrap();
    assert_that!(step_tuple(&si)).is_equal_to((4, 0., false, false));

    let si = env.step_discrete(1).unwrap();
    assert_eq!(si.observation, 5);
    assert_eq!(format!("terminated: {}", si.terminated), "terminated: true");
    assert_eq!(format!("truncated: {}", si.truncated), "truncated: false");
    assert_float_eq!(si.reward, 1., rmax <= 1e-16);

    let (s, _) = env.reset();
    assert_eq!(s, 2);

    let si = env.step_discrete(0).unwrap();
    assert_that!(step_tuple(&si)).is_equal_to((1, 0., false, false));

    let si = env.step_discrete(0).unwrap();
    assert_that!(step_tuple(&si)).is_equal_to((0, 0., false, false));

    let si = env.step_discrete(0).unwrap();
    assert_eq!(si.observation, 5);
    assert!(si.terminated);
    assert!(!si.truncated);
    assert_float_eq!(si.reward, -1., rmax <= 1e-16);
}

#[test]
fn reset_is_idempotent() {
    let env = &mut scenario_env();
    env.step(Action::Right).unwrap();

    let first = env.reset();
    let second = env.reset();

    assert_eq!(first, second);
    assert_eq!(first.0, env.start_state());
    assert_eq!(env.state(), 2);
}

#[rstest]
#[case(0, Action::Left)]
#[case(0, Action::Right)]
#[case(3, Action::Left)]
#[case(4, Action::Right)]
fn steps_are_deterministic(#[case] start: Discrete, #[case] action: Action) {
    let rewards = RewardTable::from([((0, 5), -1.), ((4, 5), 1.), ((3, 2), 0.25)]);
    let env = &mut RandomWalk::new(RandomWalkConfig::new(5, start, rewards)).unwrap();

    let outcomes = (0..10)
        .map(|_| {
            env.reset();
            step_tuple(&env.step(action).unwrap())
        })
        .collect::<Vec<_>>();

    assert!(outcomes.iter().all(|o| *o == outcomes[0]));
}

#[test]
fn left_boundary_absorbs_with_default_reward() {
    let env = &mut RandomWalk::new(RandomWalkConfig::new(3, 0, RewardTable::new())).unwrap();

    let si = env.step(Action::Left).unwrap();

    assert_eq!(si.observation, env.terminal_state());
    assert!(si.terminated);
    assert_float_eq!(si.reward, DEFAULT_REWARD, abs <= 1e-12);
}

#[test]
fn rewards_use_ordered_pairs() {
    let rewards = RewardTable::from([((1, 2), 2.), ((2, 1), -3.)]);
    let env = &mut RandomWalk::new(RandomWalkConfig::new(5, 1, rewards)).unwrap();

    assert_float_eq!(env.step(Action::Right).unwrap().reward, 2., abs <= 1e-12);
    assert_float_eq!(env.step(Action::Left).unwrap().reward, -3., abs <= 1e-12);
    assert_float_eq!(env.step(Action::Left).unwrap().reward, 0., abs <= 1e-12);
}

#[rstest]
#[case(1, 0)]
#[case(5, 2)]
#[case(9, 8)]
fn terminated_iff_sentinel_observed(#[case] n: Discrete, #[case] start: Discrete) {
    let env = &mut RandomWalk::new(RandomWalkConfig::new(n, start, RewardTable::new())).unwrap();

    for action in [Action::Right, Action::Left] {
        env.reset();
        loop {
            let si = env.step(action).unwrap();
            assert_eq!(si.terminated, si.observation == n);
            assert!(!si.truncated);
            if si.terminated {
                break;
            }
        }
    }
}

#[test]
fn construction_fails_fast() {
    let e = RandomWalk::new(RandomWalkConfig::new(5, 5, RewardTable::new())).unwrap_err();

    assert_that!(e).is_equal_to(WalkError::InvalidStartState {
        start_state: 5,
        non_terminal_state_count: 5,
    });
}
