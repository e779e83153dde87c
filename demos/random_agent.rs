extern crate random_walk;

use random_walk::mdps::*;
use random_walk::render::render_ansi;
use random_walk::*;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut env = RandomWalk::from_json(
        r#"{
            "non_terminal_state_count": 5,
            "start_state": 2,
            "rewards": [
                { "from": 0, "to": 5, "reward": -1.0 },
                { "from": 4, "to": 5, "reward": 1.0 }
            ]
        }"#,
    )?;
    let policy = RandomPolicy::new(env.action_space(), Some(2718));

    for ep in 0..5 {
        let (mut s, _) = env.reset();
        print!("{}", render_ansi(&env.snapshot()).as_str());

        let mut tot_reward = 0.;
        for _ in 0..100 {
            let si = env.step_discrete(policy.policy(s))?;
            tot_reward += si.reward;
            s = si.observation;
            print!("{}", render_ansi(&env.snapshot()).as_str());

            if si.terminated || si.truncated {
                break;
            }
        }
        info!(episode = ep, reward = tot_reward, "Finished episode.");
    }

    Ok(())
}
