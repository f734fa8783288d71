//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EventRow, OutputResult, TurnSummaryRow};

/// Trait implemented by the history log, CSV, and SQLite writers.
///
/// Errors are returned to the caller; [`SimOutputObserver`][crate::SimOutputObserver]
/// stores the first one and surfaces it as an observer fault.
pub trait OutputWriter {
    /// Write one turn's events, in the order they happened.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Write one turn summary row.
    fn write_turn_summary(&mut self, row: &TurnSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        (**self).write_events(rows)
    }

    fn write_turn_summary(&mut self, row: &TurnSummaryRow) -> OutputResult<()> {
        (**self).write_turn_summary(row)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}

/// Fan out to every writer.  Each writer is attempted even if an earlier one
/// failed; the first error is returned.
impl<W: OutputWriter> OutputWriter for Vec<W> {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        first_error(self.iter_mut().map(|w| w.write_events(rows)))
    }

    fn write_turn_summary(&mut self, row: &TurnSummaryRow) -> OutputResult<()> {
        first_error(self.iter_mut().map(|w| w.write_turn_summary(row)))
    }

    fn finish(&mut self) -> OutputResult<()> {
        first_error(self.iter_mut().map(|w| w.finish()))
    }
}

fn first_error(results: impl Iterator<Item = OutputResult<()>>) -> OutputResult<()> {
    let mut first = Ok(());
    for result in results {
        if first.is_ok() {
            first = result;
        }
    }
    first
}
