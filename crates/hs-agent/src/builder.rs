//! Fluent builder for [`Agent`] records.
//!
//! # Usage
//!
//! ```rust
//! use hs_agent::AgentBuilder;
//!
//! let horatio = AgentBuilder::new("Horatio")
//!     .temperament(0.3, 0.95, 0.2)
//!     .goals(["protect_hamlet", "seek_truth", "survive"])
//!     .mood(0.6)
//!     .suspicion_level(0.3)
//!     .build();
//!
//! assert_eq!(horatio.name(), "Horatio");
//! assert!(horatio.is_alive());
//! ```

use crate::temperament::unit_clamp;
use crate::{Agent, AgentState, Temperament};

/// Fluent builder for [`Agent`].
///
/// Anything not set falls back to the defaults: temperament `0.5` across the
/// board, goals `["survive"]`, and a fresh [`AgentState`].
pub struct AgentBuilder {
    name:        String,
    temperament: Temperament,
    goals:       Option<Vec<String>>,
    state:       AgentState,
}

impl AgentBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:        name.into(),
            temperament: Temperament::default(),
            goals:       None,
            state:       AgentState::default(),
        }
    }

    /// Personality traits; each value is clamped into `[0, 1]`.
    pub fn temperament(mut self, aggression: f64, loyalty: f64, paranoia: f64) -> Self {
        self.temperament = Temperament::new(aggression, loyalty, paranoia);
        self
    }

    pub fn goals<I, S>(mut self, goals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.goals = Some(goals.into_iter().map(Into::into).collect());
        self
    }

    pub fn mood(mut self, mood: f64) -> Self {
        self.state.set_mood(mood);
        self
    }

    pub fn suspicion_level(mut self, level: f64) -> Self {
        self.state.set_suspicion_level(level);
        self
    }

    /// Starting health, clamped into `[0, 1]`.  Mostly useful in tests that
    /// need a fragile agent; an agent built with zero health starts dead.
    pub fn health(mut self, health: f64) -> Self {
        self.state.health = unit_clamp(health);
        self.state.is_alive = self.state.health > 0.0;
        self
    }

    /// Build an unregistered agent (its id is `AgentId::INVALID` until it is
    /// inserted into an [`AgentRegistry`][crate::AgentRegistry]).
    pub fn build(self) -> Agent {
        let goals = self.goals.unwrap_or_else(|| vec!["survive".to_string()]);
        Agent::new(self.name, self.temperament, goals, self.state)
    }
}
