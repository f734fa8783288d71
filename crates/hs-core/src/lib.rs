//! `hs-core` — foundational types for the Elsinore court simulation.
//!
//! This crate is a dependency of every other `hs-*` crate.  It has no
//! `hs-*` dependencies and few external ones (`rand`, `thiserror`,
//! `chrono`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `AgentId`                                              |
//! | [`action`] | `ActionKind` (talk, spy, betray, accuse, …)            |
//! | [`turn`]   | `Turn`, `SimConfig`, `Odds`                            |
//! | [`event`]  | `Event` — one resolved activation                      |
//! | [`rng`]    | `SimRng` — the single random source of a run           |
//! | [`error`]  | `HsError`, `HsResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod action;
pub mod error;
pub mod event;
pub mod ids;
pub mod rng;
pub mod turn;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::ActionKind;
pub use error::{HsError, HsResult};
pub use event::Event;
pub use ids::AgentId;
pub use rng::SimRng;
pub use turn::{Odds, SimConfig, Turn};
