use hs_core::HsError;
use thiserror::Error;

use crate::EndReason;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] HsError),

    #[error("simulation has ended ({0})")]
    Ended(EndReason),

    #[error("simulation lock poisoned by a panicked thread")]
    LockPoisoned,

    #[error("background runner thread panicked")]
    RunnerPanicked,

    #[error("observer failed: {0}")]
    Observer(String),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
