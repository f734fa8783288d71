//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `events.csv`
//! - `turn_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, TurnSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    events:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["turn", "actor", "action", "target", "description", "timestamp"])?;

        let mut summaries = Writer::from_path(dir.join("turn_summaries.csv"))?;
        summaries.write_record(["turn", "events", "living", "alliances", "conflicts"])?;

        Ok(Self { events, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record([
                row.turn.to_string().as_str(),
                row.actor.as_str(),
                row.action,
                row.target.as_str(),
                row.description.as_str(),
                row.timestamp.as_str(),
            ])?;
        }
        Ok(())
    }

    fn write_turn_summary(&mut self, row: &TurnSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.turn.to_string(),
            row.events.to_string(),
            row.living.to_string(),
            row.alliances.to_string(),
            row.conflicts.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
