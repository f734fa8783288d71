//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `court.db` file in the configured output directory with
//! two tables: `events` and `turn_summaries`.  A database left by an earlier
//! run is replaced, as the history log is.

use std::fs;
use std::io;
use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, TurnSummaryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Create `court.db` in `dir`, replacing any previous one, and initialise
    /// the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let path = dir.join("court.db");
        for stale in [path.clone(), path.with_extension("db-wal"), path.with_extension("db-shm")] {
            match fs::remove_file(&stale) {
                Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e.into()),
                _ => {}
            }
        }
        let conn = Connection::open(&path)?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE events (
                 turn        INTEGER NOT NULL,
                 actor       TEXT    NOT NULL,
                 action      TEXT    NOT NULL,
                 target      TEXT,
                 description TEXT    NOT NULL,
                 timestamp   TEXT    NOT NULL
             );
             CREATE TABLE turn_summaries (
                 turn      INTEGER PRIMARY KEY,
                 events    INTEGER NOT NULL,
                 living    INTEGER NOT NULL,
                 alliances INTEGER NOT NULL,
                 conflicts INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO events (turn, actor, action, target, description, timestamp) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                let target = (!row.target.is_empty()).then_some(row.target.as_str());
                stmt.execute(rusqlite::params![
                    row.turn,
                    row.actor,
                    row.action,
                    target,
                    row.description,
                    row.timestamp,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_turn_summary(&mut self, row: &TurnSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO turn_summaries (turn, events, living, alliances, conflicts) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![row.turn, row.events, row.living, row.alliances, row.conflicts],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
