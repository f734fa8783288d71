//! Fixed personality trait vector.

/// Clamp a trait or state scalar into `[0, 1]`.  NaN saturates to `1.0`.
#[inline]
pub fn unit_clamp(x: f64) -> f64 {
    if x.is_nan() { 1.0 } else { x.clamp(0.0, 1.0) }
}

/// An agent's immutable personality: `{aggression, loyalty, paranoia} ∈ [0,1]³`.
///
/// Values are clamped at construction and cannot change afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Temperament {
    aggression: f64,
    loyalty:    f64,
    paranoia:   f64,
}

impl Temperament {
    pub fn new(aggression: f64, loyalty: f64, paranoia: f64) -> Self {
        Self {
            aggression: unit_clamp(aggression),
            loyalty:    unit_clamp(loyalty),
            paranoia:   unit_clamp(paranoia),
        }
    }

    #[inline]
    pub fn aggression(&self) -> f64 {
        self.aggression
    }

    #[inline]
    pub fn loyalty(&self) -> f64 {
        self.loyalty
    }

    #[inline]
    pub fn paranoia(&self) -> f64 {
        self.paranoia
    }
}

impl Default for Temperament {
    fn default() -> Self {
        Self::new(0.5, 0.5, 0.5)
    }
}
