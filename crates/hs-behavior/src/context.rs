//! Read-only state passed to [`DecisionPolicy::choose`][crate::DecisionPolicy::choose].

use hs_core::{AgentId, SimRng};
use hs_world::{Relationship, WorldState};

/// A view of the world from one agent's point of view.
///
/// `others` holds the peers the actor may consider this activation: never
/// the actor itself, never an agent that is already dead.  It keeps the
/// order the scheduler handed it in, so random picks depend only on the RNG.
pub struct DecisionContext<'a> {
    pub world:  &'a WorldState,
    pub actor:  AgentId,
    pub others: Vec<AgentId>,
}

impl<'a> DecisionContext<'a> {
    #[inline]
    pub fn new(world: &'a WorldState, actor: AgentId, others: Vec<AgentId>) -> Self {
        Self { world, actor, others }
    }

    /// The peer called `name`, if it is among `others`.
    pub fn find(&self, name: &str) -> Option<AgentId> {
        self.others.iter().copied().find(|&id| self.world.name_of(id) == name)
    }

    /// The `a→b` edge.  Never creates storage.
    #[inline]
    pub fn relationship(&self, a: AgentId, b: AgentId) -> Relationship {
        self.world.matrix().peek(a, b)
    }

    #[inline]
    pub fn suspicion_towards(&self, other: AgentId) -> f64 {
        self.relationship(self.actor, other).suspicion
    }

    #[inline]
    pub fn trust_towards(&self, other: AgentId) -> f64 {
        self.relationship(self.actor, other).trust
    }

    /// A uniformly chosen peer; `None` if there are none.
    pub fn random_other(&self, rng: &mut SimRng) -> Option<AgentId> {
        rng.choose(&self.others).copied()
    }
}
