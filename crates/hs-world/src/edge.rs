//! The directed relationship edge.

use std::fmt;
use std::str::FromStr;

use hs_agent::temperament::unit_clamp;
use hs_core::HsError;

// ── Relationship ──────────────────────────────────────────────────────────────

/// How one agent regards another.  Directed: A→B says nothing about B→A.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relationship {
    pub trust:     f64,
    pub fear:      f64,
    pub suspicion: f64,
    pub love:      f64,
    pub influence: f64,
}

impl Default for Relationship {
    /// A stranger: moderate trust, nothing else.
    fn default() -> Self {
        Self { trust: 0.5, fear: 0.0, suspicion: 0.0, love: 0.0, influence: 0.0 }
    }
}

impl Relationship {
    #[inline]
    pub fn get(&self, field: EdgeField) -> f64 {
        match field {
            EdgeField::Trust => self.trust,
            EdgeField::Fear => self.fear,
            EdgeField::Suspicion => self.suspicion,
            EdgeField::Love => self.love,
            EdgeField::Influence => self.influence,
        }
    }

    /// Absolute write, clamped into `[0, 1]`.
    pub fn set(&mut self, field: EdgeField, value: f64) {
        let slot = match field {
            EdgeField::Trust => &mut self.trust,
            EdgeField::Fear => &mut self.fear,
            EdgeField::Suspicion => &mut self.suspicion,
            EdgeField::Love => &mut self.love,
            EdgeField::Influence => &mut self.influence,
        };
        *slot = unit_clamp(value);
    }

    /// Add every delta, then clamp each touched field.
    pub fn apply(&mut self, delta: &RelationshipDelta) {
        for (field, d) in delta.iter() {
            self.set(field, self.get(field) + d);
        }
    }

    /// `trust + love`; the alliance score.
    #[inline]
    pub fn affinity(&self) -> f64 {
        self.trust + self.love
    }

    /// `suspicion + fear`; the conflict score.
    #[inline]
    pub fn hostility(&self) -> f64 {
        self.suspicion + self.fear
    }
}

// ── EdgeField ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EdgeField {
    Trust,
    Fear,
    Suspicion,
    Love,
    Influence,
}

impl EdgeField {
    pub const ALL: [EdgeField; 5] = [
        EdgeField::Trust,
        EdgeField::Fear,
        EdgeField::Suspicion,
        EdgeField::Love,
        EdgeField::Influence,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EdgeField::Trust => "trust",
            EdgeField::Fear => "fear",
            EdgeField::Suspicion => "suspicion",
            EdgeField::Love => "love",
            EdgeField::Influence => "influence",
        }
    }
}

impl fmt::Display for EdgeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeField {
    type Err = HsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EdgeField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| HsError::Parse(format!("unknown relationship field `{s}`")))
    }
}

// ── RelationshipDelta ─────────────────────────────────────────────────────────

/// Additive change to any subset of the five fields.
///
/// ```rust
/// use hs_world::{Relationship, RelationshipDelta};
///
/// let mut edge = Relationship::default();
/// edge.apply(&RelationshipDelta::new().trust(0.1).love(0.05));
/// assert!((edge.trust - 0.6).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RelationshipDelta {
    pub trust:     Option<f64>,
    pub fear:      Option<f64>,
    pub suspicion: Option<f64>,
    pub love:      Option<f64>,
    pub influence: Option<f64>,
}

impl RelationshipDelta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trust(mut self, d: f64) -> Self {
        self.trust = Some(d);
        self
    }

    pub fn fear(mut self, d: f64) -> Self {
        self.fear = Some(d);
        self
    }

    pub fn suspicion(mut self, d: f64) -> Self {
        self.suspicion = Some(d);
        self
    }

    pub fn love(mut self, d: f64) -> Self {
        self.love = Some(d);
        self
    }

    pub fn influence(mut self, d: f64) -> Self {
        self.influence = Some(d);
        self
    }

    /// The fields this delta touches, in `EdgeField::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeField, f64)> {
        [self.trust, self.fear, self.suspicion, self.love, self.influence]
            .into_iter()
            .zip(EdgeField::ALL)
            .filter_map(|(d, field)| d.map(|d| (field, d)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
