//! Serializable views of a simulation for JSON consumers.
//!
//! Field names mirror the domain types one-to-one (`trust`, `suspicion`,
//! `action`, `target`, …).  Views are copies, so they can be taken under a
//! read lock and serialized after it is released.

use std::collections::BTreeMap;

use hs_agent::Agent;
use hs_behavior::DecisionPolicy;
use hs_core::Event;
use hs_world::Relationship;
use serde::Serialize;

use crate::{Sim, SimResult};

#[derive(Clone, Debug, Serialize)]
pub struct StateView {
    pub turn:          u64,
    pub living_count:  usize,
    pub living_agents: Vec<String>,
    pub status:        String,
}

#[derive(Clone, Debug, Serialize)]
pub struct AgentView {
    pub name:            String,
    pub alive:           bool,
    pub mood:            f64,
    pub health:          f64,
    pub suspicion_level: f64,
    pub is_hidden:       bool,
    pub aggression:      f64,
    pub loyalty:         f64,
    pub paranoia:        f64,
    pub goals:           Vec<String>,
}

impl From<&Agent> for AgentView {
    fn from(a: &Agent) -> Self {
        let t = a.temperament();
        Self {
            name:            a.name().to_string(),
            alive:           a.is_alive(),
            mood:            a.state.mood,
            health:          a.state.health(),
            suspicion_level: a.state.suspicion_level,
            is_hidden:       a.state.is_hidden,
            aggression:      t.aggression(),
            loyalty:         t.loyalty(),
            paranoia:        t.paranoia(),
            goals:           a.goals.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct EventView {
    pub turn:        u64,
    pub agent:       String,
    pub action:      String,
    pub target:      Option<String>,
    pub description: String,
    pub timestamp:   String,
}

impl From<&Event> for EventView {
    fn from(e: &Event) -> Self {
        Self {
            turn:        e.turn.0,
            agent:       e.actor.clone(),
            action:      e.action.as_str().to_string(),
            target:      e.target.clone(),
            description: e.description.clone(),
            timestamp:   e.timestamp.to_rfc3339(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct AllianceView {
    pub agent1: String,
    pub agent2: String,
    pub trust:  f64,
    pub love:   f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct ConflictView {
    pub agent1:    String,
    pub agent2:    String,
    pub suspicion: f64,
    pub fear:      f64,
}

/// `{from: {to: edge}}` over living agents.
pub type RelationshipView = BTreeMap<String, BTreeMap<String, Relationship>>;

impl<P: DecisionPolicy> Sim<P> {
    pub fn state_view(&self) -> StateView {
        let living = self.living_agents();
        StateView {
            turn:          self.turn().0,
            living_count:  living.len(),
            living_agents: living.iter().map(|a| a.name().to_string()).collect(),
            status:        self.status().as_str().to_string(),
        }
    }

    /// Every agent, dead ones included, in registration order.
    pub fn agent_views(&self) -> Vec<AgentView> {
        self.world().agents().iter().map(AgentView::from).collect()
    }

    pub fn event_views(&self, recent: usize) -> Vec<EventView> {
        self.recent_events(recent).iter().map(EventView::from).collect()
    }

    pub fn alliance_views(&self) -> Vec<AllianceView> {
        self.alliances()
            .into_iter()
            .map(|(a, b)| {
                let rel = self.world().matrix().peek(a.id(), b.id());
                AllianceView {
                    agent1: a.name().to_string(),
                    agent2: b.name().to_string(),
                    trust:  rel.trust,
                    love:   rel.love,
                }
            })
            .collect()
    }

    pub fn conflict_views(&self) -> Vec<ConflictView> {
        self.conflicts()
            .into_iter()
            .map(|(a, b)| {
                let rel = self.world().matrix().peek(a.id(), b.id());
                ConflictView {
                    agent1:    a.name().to_string(),
                    agent2:    b.name().to_string(),
                    suspicion: rel.suspicion,
                    fear:      rel.fear,
                }
            })
            .collect()
    }

    pub fn relationship_view(&self) -> RelationshipView {
        let world = self.world();
        let living = world.living();
        let mut out = RelationshipView::new();
        for a in &living {
            let row = out.entry(a.name().to_string()).or_default();
            for b in &living {
                if a.id() != b.id() {
                    row.insert(b.name().to_string(), world.matrix().peek(a.id(), b.id()));
                }
            }
        }
        out
    }
}

/// Pretty-printed JSON for any view.
pub fn to_json<T: Serialize + ?Sized>(view: &T) -> SimResult<String> {
    Ok(serde_json::to_string_pretty(view)?)
}
