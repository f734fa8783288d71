//! `hs-agent` — agent records and the agent registry.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`temperament`] | `Temperament` — immutable aggression/loyalty/paranoia      |
//! | [`state`]       | `AgentState` — mood, health, suspicion, life, hiding       |
//! | [`agent`]       | `Agent` — name + temperament + goals + state               |
//! | [`builder`]     | `AgentBuilder` (fluent construction)                       |
//! | [`registry`]    | `AgentRegistry` — id- and name-indexed agent storage       |
//!
//! # Lifecycle
//!
//! An agent is alive from registration until its health reaches zero.
//! Death is terminal: the agent stays in the registry forever (its history
//! and relationship edges persist) but is excluded from every "living"
//! query.

pub mod agent;
pub mod builder;
pub mod registry;
pub mod state;
pub mod temperament;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use builder::AgentBuilder;
pub use registry::AgentRegistry;
pub use state::AgentState;
pub use temperament::Temperament;
