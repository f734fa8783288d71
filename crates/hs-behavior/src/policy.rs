//! The `DecisionPolicy` trait — the extension point for agent behavior.

use hs_core::{AgentId, SimRng};
use hs_world::WorldState;

use crate::{Decision, DecisionContext};

/// Pluggable agent behavior.
///
/// Only [`choose`][Self::choose] is required.  The scheduler calls
/// [`decide`][Self::decide], which enforces the calling convention and then
/// delegates.
///
/// # Thread safety
///
/// A running simulation may live behind a lock shared with a background
/// thread, so policies must be `Send + Sync`.  Per-agent state belongs in
/// the world, not in the policy.
pub trait DecisionPolicy: Send + Sync + 'static {
    /// Pick an action.  `ctx.others` is never empty when called through
    /// [`decide`][Self::decide].
    fn choose(&self, ctx: &DecisionContext<'_>, rng: &mut SimRng) -> Decision;

    /// Filter `others` down to living agents other than `actor`, hide if
    /// nobody is left, otherwise [`choose`][Self::choose].
    ///
    /// `others` may be stale (taken before earlier activations this turn);
    /// agents that have died since are dropped here.
    fn decide(
        &self,
        actor:  AgentId,
        world:  &WorldState,
        others: &[AgentId],
        rng:    &mut SimRng,
    ) -> Decision {
        let living: Vec<AgentId> = others
            .iter()
            .copied()
            .filter(|&id| id != actor && world.is_alive(id))
            .collect();
        if living.is_empty() {
            return Decision::hide();
        }
        self.choose(&DecisionContext::new(world, actor, living), rng)
    }
}

impl DecisionPolicy for Box<dyn DecisionPolicy> {
    fn choose(&self, ctx: &DecisionContext<'_>, rng: &mut SimRng) -> Decision {
        (**self).choose(ctx, rng)
    }
}
