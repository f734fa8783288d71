//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use hs_core::{Event, Turn};
use hs_sim::{SimObserver, SimStatus};
use hs_world::WorldState;
use tracing::{debug, warn};

use crate::row::{EventRow, TurnSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes each turn's events and a turn summary to
/// any [`OutputWriter`] backend.
///
/// `SimObserver` callbacks cannot fail, so the first writer error is stored
/// and reported through [`SimObserver::fault`]; `Sim::run` and the
/// background runner stop on it.  Retrieve the error itself with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  Call this when a run is paused or abandoned
    /// rather than ended.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_turn_end(&mut self, turn: Turn, events: &[Event], world: &WorldState) {
        let rows: Vec<EventRow> = events.iter().map(EventRow::from).collect();
        let result = self.writer.write_events(&rows);
        self.store_err(result);

        let summary = TurnSummaryRow {
            turn:      turn.0,
            events:    events.len() as u64,
            living:    world.agents().living_count() as u64,
            alliances: world.alliances().len() as u64,
            conflicts: world.conflicts().len() as u64,
        };
        let result = self.writer.write_turn_summary(&summary);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, turn: Turn, status: &SimStatus) {
        debug!(turn = turn.0, %status, "finishing output");
        let result = self.writer.finish();
        self.store_err(result);
    }

    fn fault(&self) -> Option<String> {
        self.last_error.as_ref().map(ToString::to_string)
    }
}
