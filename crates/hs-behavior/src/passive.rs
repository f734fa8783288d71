//! A policy that never does anything.

use hs_core::SimRng;

use crate::{Decision, DecisionContext, DecisionPolicy};

/// Always hides.
///
/// Useful in tests and for bystanders that should occupy the court without
/// influencing it.
pub struct Passive;

impl DecisionPolicy for Passive {
    fn choose(&self, _ctx: &DecisionContext<'_>, _rng: &mut SimRng) -> Decision {
        Decision::hide()
    }
}
