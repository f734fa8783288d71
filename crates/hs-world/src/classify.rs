//! Alliance and conflict classification.
//!
//! Both queries walk unordered pairs of living agents in registration order
//! and look only at the `(a, b)` edge where `a` was registered first.  The
//! result is recomputed on every call.

use hs_core::AgentId;

use crate::{Relationship, WorldState};

/// `trust + love` strictly above this makes an alliance.
pub const ALLIANCE_THRESHOLD: f64 = 1.2;

/// `suspicion + fear` strictly above this makes a conflict.
pub const CONFLICT_THRESHOLD: f64 = 1.2;

impl WorldState {
    /// Living pairs whose `a→b` edge has `trust + love > 1.2`.
    pub fn alliances(&self) -> Vec<(AgentId, AgentId)> {
        self.pairs_where(|rel| rel.affinity() > ALLIANCE_THRESHOLD)
    }

    /// Living pairs whose `a→b` edge has `suspicion + fear > 1.2`.
    pub fn conflicts(&self) -> Vec<(AgentId, AgentId)> {
        self.pairs_where(|rel| rel.hostility() > CONFLICT_THRESHOLD)
    }

    fn pairs_where(&self, pred: impl Fn(&Relationship) -> bool) -> Vec<(AgentId, AgentId)> {
        let living = self.living_ids();
        let mut out = Vec::new();
        for (i, &a) in living.iter().enumerate() {
            for &b in &living[i + 1..] {
                if pred(&self.matrix().peek(a, b)) {
                    out.push((a, b));
                }
            }
        }
        out
    }
}
