//! `Event` — the immutable record of one resolved activation.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{ActionKind, Turn};

/// One agent's resolved action in a given turn.
///
/// Produced exactly once per activation by the decision engine and appended
/// to the event log.  Never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub turn:        Turn,
    pub actor:       String,
    pub action:      ActionKind,
    pub target:      Option<String>,
    pub description: String,
    pub timestamp:   DateTime<Utc>,
}

impl Event {
    /// Build an event stamped with the current wall-clock time.
    pub fn new(
        turn:        Turn,
        actor:       impl Into<String>,
        action:      ActionKind,
        target:      Option<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            turn,
            actor: actor.into(),
            action,
            target,
            description: description.into(),
            timestamp: Utc::now(),
        }
    }

    /// `true` if `name` is the actor or the target of this event.
    pub fn involves(&self, name: &str) -> bool {
        self.actor == name || self.target.as_deref() == Some(name)
    }

    /// The history-log line: `Turn {n}: {actor} {action}[ -> {target}] - {description}`.
    pub fn log_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Turn {}: {} {}", self.turn, self.actor, self.action)?;
        if let Some(target) = &self.target {
            write!(f, " -> {target}")?;
        }
        write!(f, " - {}", self.description)
    }
}
