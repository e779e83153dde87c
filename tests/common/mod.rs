use random_walk::*;

/// Five interior states starting in the middle, -1 off the left edge and +1 off the right.
#[allow(dead_code)]
pub fn scenario_env() -> RandomWalk {
    RandomWalk::new(RandomWalkConfig::new(
        5,
        2,
        RewardTable::from([((0, 5), -1.), ((4, 5), 1.)]),
    ))
    .unwrap()
}

#[allow(dead_code)]
pub fn step_tuple(si: &StepInfo) -> (Discrete, Continous, bool, bool) {
    (si.observation, si.reward, si.terminated, si.truncated)
}
