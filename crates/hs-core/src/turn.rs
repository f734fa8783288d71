//! Turn model and run configuration.
//!
//! # Design
//!
//! Simulated time is a plain turn counter.  The world starts at turn 0 and
//! the scheduler advances it by exactly one at the start of every turn, so
//! the first turn in which agents act is turn 1.  There is no wall-clock
//! mapping: the only real-time concept is the pacing delay a background
//! runner sleeps between turns.

use std::fmt;
use std::time::Duration;

// ── Turn ──────────────────────────────────────────────────────────────────────

/// An absolute turn counter.  Monotonically non-decreasing.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Turn(pub u64);

impl Turn {
    pub const ZERO: Turn = Turn(0);

    /// The turn after `self`.
    #[inline]
    pub fn next(self) -> Turn {
        Turn(self.0 + 1)
    }

    /// Turns elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Turn) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Turn {
    type Output = Turn;
    #[inline]
    fn add(self, rhs: u64) -> Turn {
        Turn(self.0 + rhs)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Odds ──────────────────────────────────────────────────────────────────────

/// Stochastic constants used when an action is resolved.
///
/// The defaults are the canonical values; tests force outcomes by setting a
/// chance to `0.0` (never) or `1.0` (always).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Odds {
    /// Chance that a spied-on target notices the spy.
    pub spy_discovery: f64,
    /// Chance that a targeted scheme is noticed by its target.
    pub scheme_discovery: f64,
    /// Chance that an attack wounds its target.
    pub injury: f64,
    /// Health removed by a wounding attack.
    pub injury_amount: f64,
}

impl Default for Odds {
    fn default() -> Self {
        Self {
            spy_discovery:    0.3,
            scheme_discovery: 0.2,
            injury:           0.3,
            injury_amount:    0.2,
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a TOML file by the application crate and passed to
/// the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// The run ends once the turn counter reaches this value.
    pub max_turns: u64,

    /// Master RNG seed.  `None` seeds from OS entropy, so runs are not
    /// reproducible.
    pub seed: Option<u64>,

    /// Pacing sleep between turns for background runs, in milliseconds.
    pub turn_delay_ms: u64,

    /// Resolution odds for covert actions and attacks.
    pub odds: Odds,
}

impl SimConfig {
    /// The turn at which the run ends (inclusive: the run stops after it).
    #[inline]
    pub fn last_turn(&self) -> Turn {
        Turn(self.max_turns)
    }

    #[inline]
    pub fn turn_delay(&self) -> Duration {
        Duration::from_millis(self.turn_delay_ms)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_turns:     50,
            seed:          None,
            turn_delay_ms: 1_000,
            odds:          Odds::default(),
        }
    }
}
