//! `hs-output` — persisted records of a court simulation.
//!
//! | Feature   | Backend      | Files created                                  |
//! |-----------|--------------|------------------------------------------------|
//! | *(none)*  | History log  | one plain-text file, one line per event        |
//! | *(none)*  | CSV          | `events.csv`, `turn_summaries.csv`             |
//! | `sqlite`  | SQLite       | `court.db`                                     |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `hs_sim::SimObserver`.  Several
//! writers can be combined in a `Vec<Box<dyn OutputWriter + Send>>`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use hs_core::SimConfig;
//! use hs_output::{HistoryLog, SimOutputObserver};
//! use hs_sim::SimBuilder;
//!
//! let mut sim = SimBuilder::elsinore(SimConfig::default()).build()?;
//! let mut obs = SimOutputObserver::new(HistoryLog::create(Path::new("history.log"))?);
//! sim.run(None, &mut obs)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! A write failure does not interrupt the turn in progress; the observer
//! keeps the first error and reports it through `SimObserver::fault`, which
//! makes `Sim::run` stop with an error before the next turn.

pub mod csv;
pub mod error;
pub mod history;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use history::{HISTORY_HEADER, HistoryLog};
pub use observer::SimOutputObserver;
pub use row::{EventRow, TurnSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
