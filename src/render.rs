use crate::common::defs::Discrete;
use crate::envs::random_walk::Snapshot;
use itertools::Itertools;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderFrame {
    Ansi(String),
}

impl RenderFrame {
    pub fn as_str(&self) -> &str {
        match self {
            RenderFrame::Ansi(s) => s,
        }
    }
}

/// Text frame of the walk: the states with the current one bracketed, then the
/// reward annotations if any rewards are set.
pub fn render_ansi(snapshot: &Snapshot) -> RenderFrame {
    let terminal = snapshot.terminal_state();
    let label = |s: Discrete| {
        if s == terminal {
            "T".to_string()
        } else {
            s.to_string()
        }
    };

    let states = (0..terminal)
        .map(|s| {
            if s == snapshot.state {
                format!("[{s}]")
            } else {
                s.to_string()
            }
        })
        .join(" <-> ");
    let mut frame = format!("T <-> {states} <-> T\n");

    if !snapshot.rewards.is_empty() {
        let rewards = snapshot
            .rewards
            .iter()
            .map(|((from, to), r)| format!("{}->{}: {r:+}", label(from), label(to)))
            .join(", ");
        frame.push_str(&rewards);
        frame.push('\n');
    }

    RenderFrame::Ansi(frame)
}
