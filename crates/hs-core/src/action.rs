//! The closed set of actions an agent can take in one activation.

use std::str::FromStr;

use crate::HsError;

/// What an agent does with its activation.
///
/// Every variant except [`ActionKind::Hide`] normally carries a target;
/// [`ActionKind::Scheme`] is also valid without one.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionKind {
    TalkTo,
    SpyOn,
    Betray,
    Accuse,
    Defend,
    Attack,
    Hide,
    Scheme,
}

impl ActionKind {
    /// Every action kind, in declaration order.
    pub const ALL: [ActionKind; 8] = [
        ActionKind::TalkTo,
        ActionKind::SpyOn,
        ActionKind::Betray,
        ActionKind::Accuse,
        ActionKind::Defend,
        ActionKind::Attack,
        ActionKind::Hide,
        ActionKind::Scheme,
    ];

    /// Wire label used in log lines, CSV columns, and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::TalkTo => "talk_to",
            ActionKind::SpyOn  => "spy_on",
            ActionKind::Betray => "betray",
            ActionKind::Accuse => "accuse",
            ActionKind::Defend => "defend",
            ActionKind::Attack => "attack",
            ActionKind::Hide   => "hide",
            ActionKind::Scheme => "scheme",
        }
    }

    /// `true` for actions that only make sense aimed at another agent.
    ///
    /// `Scheme` is excluded: it has a meaningful untargeted form.
    #[inline]
    pub fn requires_target(self) -> bool {
        !matches!(self, ActionKind::Hide | ActionKind::Scheme)
    }

    /// `true` for covert actions that the target may discover.
    #[inline]
    pub fn is_covert(self) -> bool {
        matches!(self, ActionKind::SpyOn | ActionKind::Scheme)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = HsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| HsError::Parse(format!("unknown action kind `{s}`")))
    }
}
