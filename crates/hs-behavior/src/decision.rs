//! Policy output.

use hs_core::{ActionKind, AgentId};

/// What an agent chose to do this activation.
///
/// `target` is `None` for untargeted actions (HIDE, a plain SCHEME).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub action: ActionKind,
    pub target: Option<AgentId>,
}

impl Decision {
    /// Act on `target`.
    #[inline]
    pub fn at(action: ActionKind, target: AgentId) -> Self {
        Self { action, target: Some(target) }
    }

    /// Act without a target.
    #[inline]
    pub fn alone(action: ActionKind) -> Self {
        Self { action, target: None }
    }

    #[inline]
    pub fn hide() -> Self {
        Self::alone(ActionKind::Hide)
    }
}
