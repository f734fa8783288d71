//! `hs-behavior` — how agents choose what to do.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`decision`] | `Decision` — an action kind plus an optional target             |
//! | [`context`]  | `DecisionContext<'a>` — read-only view handed to a policy       |
//! | [`policy`]   | `DecisionPolicy` trait                                          |
//! | [`rules`]    | Rule-chain data types and the evaluator                         |
//! | [`persona`]  | `Persona` — the seven court personalities as rule tables        |
//! | [`passive`]  | `Passive` — a policy that always hides                          |
//! | [`cast`]     | The Elsinore cast and its opening relationships                 |
//!
//! # Design notes
//!
//! A personality is data, not code: an ordered list of [`rules::Rule`]s
//! evaluated by one shared interpreter.  The seven personas differ only in
//! which subjects they single out, their guard thresholds, and their
//! probability constants.
//!
//! Policies never mutate the world.  They read through `&WorldState` and
//! draw from the simulation's single [`SimRng`][hs_core::SimRng], so a
//! seeded run replays identically.

pub mod cast;
pub mod context;
pub mod decision;
pub mod passive;
pub mod persona;
pub mod policy;
pub mod rules;

#[cfg(test)]
mod tests;

pub use context::DecisionContext;
pub use decision::Decision;
pub use passive::Passive;
pub use persona::{Persona, Profile};
pub use policy::DecisionPolicy;
pub use rules::{Aim, Gate, Guard, Pick, Rule, RuleChain, Subject};
