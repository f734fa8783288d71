//! The plain-text history log.
//!
//! The file is truncated when the log is created and starts with a fixed
//! header and a blank line.  After that, each event becomes one line,
//! appended in order:
//!
//! ```text
//! === HAMLET SIMULATION LOG ===
//!
//! Turn 1: Hamlet spy_on -> Claudius - Hamlet spies on Claudius
//! Turn 1: Ophelia hide - Ophelia hides from view
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, TurnSummaryRow};

/// First line of every history log.
pub const HISTORY_HEADER: &str = "=== HAMLET SIMULATION LOG ===";

pub struct HistoryLog {
    path: PathBuf,
    out:  BufWriter<File>,
}

impl HistoryLog {
    /// Create (or truncate) `path` and write the header.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let mut out = BufWriter::new(File::create(path)?);
        write!(out, "{HISTORY_HEADER}\n\n")?;
        out.flush()?;
        debug!(path = %path.display(), "history log created");
        Ok(Self { path: path.to_path_buf(), out })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputWriter for HistoryLog {
    /// Lines are flushed per batch so the file is readable while a run is
    /// still going.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            writeln!(self.out, "{}", row.log_line())?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn write_turn_summary(&mut self, _row: &TurnSummaryRow) -> OutputResult<()> {
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
