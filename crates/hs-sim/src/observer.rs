//! Simulation observer trait for progress reporting and output collection.

use hs_agent::Agent;
use hs_core::{Event, Turn};
use hs_world::WorldState;

use crate::SimStatus;

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] at key points of a
/// turn.
///
/// All methods have no-op defaults so implementors only override what they
/// care about.
///
/// # Example — death announcer
///
/// ```rust
/// use hs_agent::Agent;
/// use hs_core::Turn;
/// use hs_sim::SimObserver;
///
/// struct Herald;
///
/// impl SimObserver for Herald {
///     fn on_death(&mut self, turn: Turn, agent: &Agent) {
///         println!("turn {turn}: {} has fallen", agent.name());
///     }
/// }
/// ```
pub trait SimObserver {
    /// After the turn counter advances, before any activation.
    fn on_turn_start(&mut self, _turn: Turn) {}

    /// Once per activation, right after the event is produced.
    fn on_event(&mut self, _event: &Event) {}

    /// When an activation kills an agent.  Fires before that activation's
    /// `on_event`.
    fn on_death(&mut self, _turn: Turn, _agent: &Agent) {}

    /// After every activation of the turn, with that turn's events.
    fn on_turn_end(&mut self, _turn: Turn, _events: &[Event], _world: &WorldState) {}

    /// Once, on the turn the simulation ends.
    fn on_sim_end(&mut self, _turn: Turn, _status: &SimStatus) {}

    /// A failure the observer could not surface through its callbacks.
    /// Drivers check this between turns and abort the run when it is `Some`.
    fn fault(&self) -> Option<String> {
        None
    }
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
