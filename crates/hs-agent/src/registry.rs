//! `AgentRegistry` — the authoritative list of agents in a run.
//!
//! # Why ids *and* names?
//!
//! Agents are identified externally by unique name, but every hot path
//! (relationship lookups, activation order, policy tables) works on
//! [`AgentId`], which is just the insertion index.  The registry keeps both
//! views in sync: `agents[id.index()]` is the agent, and `by_name` maps the
//! name back to its id.
//!
//! Membership is fixed once the registry is handed to the world: agents are
//! never removed, dead ones included.

use std::collections::HashMap;

use hs_core::{AgentId, HsError, HsResult};

use crate::Agent;

#[derive(Clone, Debug, Default)]
pub struct AgentRegistry {
    agents:  Vec<Agent>,
    by_name: HashMap<String, AgentId>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of agents, in order.
    pub fn from_agents(agents: impl IntoIterator<Item = Agent>) -> HsResult<Self> {
        let mut registry = Self::new();
        for agent in agents {
            registry.insert(agent)?;
        }
        Ok(registry)
    }

    /// Register `agent` and assign its id.
    ///
    /// Fails with [`HsError::DuplicateAgent`] if the name is taken.
    pub fn insert(&mut self, mut agent: Agent) -> HsResult<AgentId> {
        if self.by_name.contains_key(agent.name()) {
            return Err(HsError::DuplicateAgent(agent.name().to_string()));
        }
        let id = AgentId::try_from(self.agents.len())
            .map_err(|_| HsError::Config("agent registry is full".into()))?;
        agent.id = id;
        self.by_name.insert(agent.name().to_string(), id);
        self.agents.push(agent);
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id.index())
    }

    /// Look up an id by name; `None` if no such agent was ever registered.
    #[inline]
    pub fn id_of(&self, name: &str) -> Option<AgentId> {
        self.by_name.get(name).copied()
    }

    pub fn by_name(&self, name: &str) -> Option<&Agent> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    /// Like [`id_of`](Self::id_of) but turns a miss into
    /// [`HsError::AgentNotFound`].
    pub fn require(&self, name: &str) -> HsResult<AgentId> {
        self.id_of(name)
            .ok_or_else(|| HsError::AgentNotFound(name.to_string()))
    }

    /// Name of a registered agent.  Unknown ids render as `"?"`.
    pub fn name_of(&self, id: AgentId) -> &str {
        self.get(id).map(Agent::name).unwrap_or("?")
    }

    /// `true` if `id` is registered and alive.
    #[inline]
    pub fn is_alive(&self, id: AgentId) -> bool {
        self.get(id).is_some_and(Agent::is_alive)
    }

    /// All agents in registration order, dead ones included.
    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter()
    }

    /// All ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.iter().map(Agent::id)
    }

    /// Living agents in registration order.
    pub fn living(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter().filter(|a| a.is_alive())
    }

    /// Ids of the living agents in registration order.
    pub fn living_ids(&self) -> Vec<AgentId> {
        self.living().map(Agent::id).collect()
    }

    pub fn living_count(&self) -> usize {
        self.living().count()
    }
}
