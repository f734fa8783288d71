//! Mutable per-agent runtime state.

use crate::temperament::unit_clamp;

/// Runtime state of one agent.
///
/// Health and life are read-only outside this crate: `is_alive` only ever
/// goes from `true` to `false`, and only through [`AgentState::injure`].
///
/// ```compile_fail
/// let mut s = hs_agent::AgentState::default();
/// s.is_alive = true;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    /// 0.0 = despairing, 1.0 = elated.
    pub mood:            f64,
    /// 0.0 = dead, 1.0 = unhurt.
    pub(crate) health:   f64,
    /// General wariness of others.
    pub suspicion_level: f64,
    pub(crate) is_alive: bool,
    pub is_hidden:       bool,
}

impl Default for AgentState {
    fn default() -> Self {
        Self {
            mood:            0.5,
            health:          1.0,
            suspicion_level: 0.0,
            is_alive:        true,
            is_hidden:       false,
        }
    }
}

impl AgentState {
    #[inline]
    pub fn health(&self) -> f64 {
        self.health
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    /// Subtract `amount` from health (floored at 0).
    ///
    /// Returns `true` exactly when this call killed the agent; wounding an
    /// already-dead agent is a no-op that returns `false`.
    pub fn injure(&mut self, amount: f64) -> bool {
        if !self.is_alive {
            return false;
        }
        self.health = (self.health - amount).max(0.0);
        if self.health <= 0.0 {
            self.is_alive = false;
            return true;
        }
        false
    }

    pub fn set_mood(&mut self, mood: f64) {
        self.mood = unit_clamp(mood);
    }

    pub fn set_suspicion_level(&mut self, level: f64) {
        self.suspicion_level = unit_clamp(level);
    }
}
