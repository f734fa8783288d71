//! In-memory, append-only event history.

use std::fmt::Write as _;

use hs_core::{Event, Turn};

/// Every event of a run, in the order it happened.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn all(&self) -> &[Event] {
        &self.events
    }

    /// Events appended at or after position `start`.
    pub fn since(&self, start: usize) -> &[Event] {
        self.events.get(start..).unwrap_or(&[])
    }

    pub fn events_for_turn(&self, turn: Turn) -> Vec<&Event> {
        self.events.iter().filter(|e| e.turn == turn).collect()
    }

    /// The last `count` events (all of them if there are fewer).
    pub fn recent(&self, count: usize) -> &[Event] {
        let start = self.events.len().saturating_sub(count);
        &self.events[start..]
    }

    /// `=== Turn n Summary ===` followed by one indented line per event, or
    /// `Turn n: No events`.
    pub fn summary_for_turn(&self, turn: Turn) -> String {
        let events = self.events_for_turn(turn);
        if events.is_empty() {
            return format!("Turn {turn}: No events");
        }
        let mut out = format!("=== Turn {turn} Summary ===");
        for event in events {
            let _ = write!(out, "\n  {event}");
        }
        out
    }
}
