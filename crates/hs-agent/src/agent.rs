//! The `Agent` record.

use hs_core::AgentId;

use crate::{AgentState, Temperament};

/// One character in the court.
///
/// `name` and `temperament` are fixed for the agent's lifetime; `goals` and
/// `state` are mutable.  Goals are informational labels only: no decision
/// logic reads them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub(crate) id:   AgentId,
    name:            String,
    temperament:     Temperament,
    pub goals:       Vec<String>,
    pub state:       AgentState,
}

impl Agent {
    pub(crate) fn new(
        name:        String,
        temperament: Temperament,
        goals:       Vec<String>,
        state:       AgentState,
    ) -> Self {
        Self { id: AgentId::INVALID, name, temperament, goals, state }
    }

    /// Registry index.  `AgentId::INVALID` until the agent is registered.
    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn temperament(&self) -> Temperament {
        self.temperament
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state.is_alive
    }
}
