//! `hs-world` — relationships and the shared world state.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`edge`]     | `Relationship` edge, `EdgeField`, `RelationshipDelta`         |
//! | [`matrix`]   | `RelationshipMatrix` — directed, lazily populated edge map    |
//! | [`world`]    | `WorldState` — registry + matrix + turn counter               |
//! | [`classify`] | Alliance / conflict classification over living pairs          |
//!
//! # Numeric invariant
//!
//! Every edge field lives in `[0, 1]`.  All writes go through either an
//! absolute set or an add-then-clamp, so no sequence of operations can push
//! a field outside that range.

pub mod classify;
pub mod edge;
pub mod matrix;
pub mod world;


pub use classify::{ALLIANCE_THRESHOLD, CONFLICT_THRESHOLD};
pub use edge::{EdgeField, Relationship, RelationshipDelta};
pub use matrix::RelationshipMatrix;
pub use world::WorldState;
