//! `WorldState` — everything an activation can observe or mutate.

use hs_agent::{Agent, AgentRegistry};
use hs_core::{AgentId, HsResult, Turn};

use crate::{Relationship, RelationshipMatrix};

/// The registry, the single relationship matrix, and the turn counter.
///
/// Membership is fixed at construction.  Only the scheduler advances the
/// turn; only the decision engine (and scenario setup) mutates the matrix or
/// agent state.
#[derive(Clone, Debug)]
pub struct WorldState {
    agents: AgentRegistry,
    matrix: RelationshipMatrix,
    turn:   Turn,
}

impl WorldState {
    /// Wrap `agents` and create the default edge for every ordered pair of
    /// distinct agents.
    pub fn new(agents: AgentRegistry) -> Self {
        let mut matrix = RelationshipMatrix::new();
        let ids: Vec<AgentId> = agents.ids().collect();
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                matrix.ensure_pair(a, b);
            }
        }
        Self { agents, matrix, turn: Turn::ZERO }
    }

    // ── Turn ──────────────────────────────────────────────────────────────────

    #[inline]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Increment the turn counter and return the new value.
    pub fn advance_turn(&mut self) -> Turn {
        self.turn = self.turn.next();
        self.turn
    }

    // ── Agents ────────────────────────────────────────────────────────────────

    #[inline]
    pub fn agents(&self) -> &AgentRegistry {
        &self.agents
    }

    #[inline]
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id)
    }

    #[inline]
    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id)
    }

    pub fn agent_by_name(&self, name: &str) -> Option<&Agent> {
        self.agents.by_name(name)
    }

    /// Living agents in registration order.
    pub fn living(&self) -> Vec<&Agent> {
        self.agents.living().collect()
    }

    pub fn living_ids(&self) -> Vec<AgentId> {
        self.agents.living_ids()
    }

    #[inline]
    pub fn is_alive(&self, id: AgentId) -> bool {
        self.agents.is_alive(id)
    }

    #[inline]
    pub fn name_of(&self, id: AgentId) -> &str {
        self.agents.name_of(id)
    }

    // ── Relationships ─────────────────────────────────────────────────────────

    #[inline]
    pub fn matrix(&self) -> &RelationshipMatrix {
        &self.matrix
    }

    #[inline]
    pub fn matrix_mut(&mut self) -> &mut RelationshipMatrix {
        &mut self.matrix
    }

    /// The `a→b` edge by agent name.
    pub fn relationship(&self, a: &str, b: &str) -> HsResult<Relationship> {
        let a = self.agents.require(a)?;
        let b = self.agents.require(b)?;
        Ok(self.matrix.peek(a, b))
    }

    /// Every outgoing edge of `name`, keyed by the other agent's name.
    pub fn all_relationships(&self, name: &str) -> HsResult<Vec<(String, Relationship)>> {
        let id = self.agents.require(name)?;
        Ok(self
            .matrix
            .all_from(id)
            .into_iter()
            .map(|(other, rel)| (self.agents.name_of(other).to_string(), rel))
            .collect())
    }
}
