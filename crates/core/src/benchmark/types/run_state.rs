use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// `Created → Running → Completed | Stopped`, then `Cleared` once the
/// operator throws the results away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Created,
    Running,
    Completed,
    Stopped,
    Cleared,
}

impl RunState {
    pub fn is_active(&self) -> bool {
        matches!(self, RunState::Created | RunState::Running)
    }
}

impl Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            RunState::Created => "created",
            RunState::Running => "running",
            RunState::Completed => "completed",
            RunState::Stopped => "stopped",
            RunState::Cleared => "cleared",
        };
        write!(f, "{}", text)
    }
}
