//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `HsError` as one variant
//! via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HsError {
    #[error("agent `{0}` not found")]
    AgentNotFound(String),

    #[error("an agent named `{0}` is already registered")]
    DuplicateAgent(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `hs-*` crates.
pub type HsResult<T> = Result<T, HsError>;
