//! `RelationshipMatrix` — directed edge storage keyed by ordered id pairs.
//!
//! # Lazy creation
//!
//! Touching an ordered pair (read or write) guarantees that *both*
//! directions exist afterwards, each with its own default edge.  Creating
//! A→B never copies values into B→A; it only makes sure B→A is there.
//!
//! [`peek`](RelationshipMatrix::peek) is the non-creating read used by the
//! `&self` query paths (classification, snapshots); it returns the same
//! default a lazy `get` would have created, so callers cannot tell the
//! difference.
//!
//! Edges are kept in a `BTreeMap` so iteration (and therefore every snapshot
//! and every `all_from` listing) is ordered by id.

use std::collections::BTreeMap;

use hs_core::AgentId;

use crate::{EdgeField, Relationship, RelationshipDelta};

#[derive(Clone, Debug, Default)]
pub struct RelationshipMatrix {
    edges: BTreeMap<(AgentId, AgentId), Relationship>,
}

impl RelationshipMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure both `a→b` and `b→a` exist.
    pub fn ensure_pair(&mut self, a: AgentId, b: AgentId) {
        self.edges.entry((a, b)).or_default();
        self.edges.entry((b, a)).or_default();
    }

    fn edge_mut(&mut self, a: AgentId, b: AgentId) -> &mut Relationship {
        self.edges.entry((b, a)).or_default();
        self.edges.entry((a, b)).or_default()
    }

    /// Copy of the `a→b` edge, creating both directions if absent.
    pub fn get(&mut self, a: AgentId, b: AgentId) -> Relationship {
        *self.edge_mut(a, b)
    }

    /// Copy of the `a→b` edge without creating anything.
    pub fn peek(&self, a: AgentId, b: AgentId) -> Relationship {
        self.edges.get(&(a, b)).copied().unwrap_or_default()
    }

    /// `true` once either direction of the pair has been touched.
    pub fn contains(&self, a: AgentId, b: AgentId) -> bool {
        self.edges.contains_key(&(a, b))
    }

    /// Absolute write of one field, clamped.
    pub fn set(&mut self, a: AgentId, b: AgentId, field: EdgeField, value: f64) {
        self.edge_mut(a, b).set(field, value);
    }

    /// Additive write of any subset of fields, clamped.
    pub fn modify(&mut self, a: AgentId, b: AgentId, delta: &RelationshipDelta) {
        self.edge_mut(a, b).apply(delta);
    }

    /// Every outgoing edge of `a` that exists, ordered by target id.
    pub fn all_from(&self, a: AgentId) -> Vec<(AgentId, Relationship)> {
        self.edges
            .range((a, AgentId(0))..=(a, AgentId(u32::MAX)))
            .map(|(&(_, b), &rel)| (b, rel))
            .collect()
    }

    #[inline]
    pub fn trust_level(&mut self, a: AgentId, b: AgentId) -> f64 {
        self.get(a, b).trust
    }

    #[inline]
    pub fn suspicion_level(&mut self, a: AgentId, b: AgentId) -> f64 {
        self.get(a, b).suspicion
    }

    /// Number of stored directed edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ((AgentId, AgentId), &Relationship)> + '_ {
        self.edges.iter().map(|(&k, v)| (k, v))
    }
}
