//! Plain data row types written by output backends.

use hs_core::Event;

/// One event, flattened to strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub turn:        u64,
    pub actor:       String,
    pub action:      &'static str,
    /// Empty when the action had no target.
    pub target:      String,
    pub description: String,
    /// RFC 3339, UTC.
    pub timestamp:   String,
}

impl EventRow {
    /// `Turn {n}: {actor} {action}[ -> {target}] - {description}`
    pub fn log_line(&self) -> String {
        let arrow = if self.target.is_empty() {
            String::new()
        } else {
            format!(" -> {}", self.target)
        };
        format!("Turn {}: {} {}{} - {}", self.turn, self.actor, self.action, arrow, self.description)
    }
}

impl From<&Event> for EventRow {
    fn from(e: &Event) -> Self {
        Self {
            turn:        e.turn.0,
            actor:       e.actor.clone(),
            action:      e.action.as_str(),
            target:      e.target.clone().unwrap_or_default(),
            description: e.description.clone(),
            timestamp:   e.timestamp.to_rfc3339(),
        }
    }
}

/// State of the court at the end of one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSummaryRow {
    pub turn:      u64,
    pub events:    u64,
    pub living:    u64,
    pub alliances: u64,
    pub conflicts: u64,
}
