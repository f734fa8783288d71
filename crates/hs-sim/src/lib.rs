//! `hs-sim` — turn scheduler and decision engine for the Elsinore court.
//!
//! # One turn
//!
//! ```text
//! ① Advance   — world turn counter += 1
//! ② Snapshot  — ids of the agents alive right now
//! ③ Shuffle   — uniform permutation of the snapshot (the run's SimRng)
//! ④ Activate  — for each id in that order:
//!                 skip if it died earlier this turn
//!                 others   = snapshot minus self          (may be stale)
//!                 decision = DecisionPolicy::decide(…)
//!                 event    = DecisionEngine::process(…)   (mutates world)
//!                 observer.on_event, log.push
//! ⑤ Terminate — fewer than two living agents, or turn limit reached
//! ```
//!
//! Activations are strictly sequential: one decision, one resolution, one
//! event at a time.
//!
//! # Sharing a running simulation
//!
//! [`BackgroundRunner`] drives a [`SharedSim`] (`Arc<RwLock<Sim>>`) from a
//! worker thread, holding the write lock for exactly one turn at a time.
//! Readers that take the read lock therefore only see turn-boundary state.
//!
//! # Quick-start
//!
//! ```rust,no_run
//! use hs_core::SimConfig;
//! use hs_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig { seed: Some(7), ..SimConfig::default() };
//! let mut sim = SimBuilder::elsinore(config).build()?;
//! sim.run(None, &mut NoopObserver)?;
//! println!("{}", sim.summary());
//! # Ok::<(), hs_sim::SimError>(())
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod log;
pub mod observer;
pub mod runner;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use engine::DecisionEngine;
pub use error::{SimError, SimResult};
pub use log::EventLog;
pub use observer::{NoopObserver, SimObserver};
pub use runner::{BackgroundRunner, SharedSim, share};
pub use sim::{EndReason, Sim, SimStatus, StopHandle};
pub use snapshot::{
    AgentView, AllianceView, ConflictView, EventView, RelationshipView, StateView, to_json,
};
