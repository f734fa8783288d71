//! The Elsinore cast and where everyone stands with everyone else on the
//! first morning.

use hs_agent::Agent;
use hs_world::EdgeField::{self, Fear, Influence, Love, Suspicion, Trust};
use hs_world::WorldState;

use crate::Persona;

/// All seven personas, paired with their agents, in canonical order.
pub fn elsinore() -> Vec<(Agent, Persona)> {
    Persona::ALL.into_iter().map(|p| (p.agent(), p)).collect()
}

/// `(from, to, field, value)` absolute writes.
const OPENING: &[(&str, &str, EdgeField, f64)] = &[
    ("Hamlet", "Horatio", Trust, 0.9),
    ("Hamlet", "Horatio", Love, 0.8),
    ("Horatio", "Hamlet", Trust, 0.9),
    ("Horatio", "Hamlet", Love, 0.85),
    ("Hamlet", "Claudius", Suspicion, 0.7),
    ("Hamlet", "Claudius", Trust, 0.2),
    ("Claudius", "Hamlet", Suspicion, 0.6),
    ("Claudius", "Hamlet", Fear, 0.4),
    ("Claudius", "Gertrude", Trust, 0.6),
    ("Claudius", "Gertrude", Love, 0.5),
    ("Gertrude", "Claudius", Trust, 0.6),
    ("Gertrude", "Claudius", Love, 0.5),
    ("Hamlet", "Gertrude", Trust, 0.4),
    ("Hamlet", "Gertrude", Love, 0.5),
    ("Gertrude", "Hamlet", Trust, 0.5),
    ("Gertrude", "Hamlet", Love, 0.7),
    ("Ophelia", "Laertes", Love, 0.9),
    ("Ophelia", "Laertes", Trust, 0.8),
    ("Laertes", "Ophelia", Love, 0.9),
    ("Laertes", "Ophelia", Trust, 0.8),
    ("Ophelia", "Polonius", Love, 0.8),
    ("Ophelia", "Polonius", Trust, 0.7),
    ("Polonius", "Ophelia", Love, 0.8),
    ("Polonius", "Ophelia", Trust, 0.7),
    ("Polonius", "Claudius", Trust, 0.6),
    ("Polonius", "Claudius", Influence, 0.5),
    ("Claudius", "Polonius", Trust, 0.5),
    ("Hamlet", "Ophelia", Love, 0.4),
    ("Hamlet", "Ophelia", Trust, 0.3),
    ("Ophelia", "Hamlet", Love, 0.5),
    ("Ophelia", "Hamlet", Trust, 0.4),
];

/// Apply the opening relationships.  Pairs with a missing agent are skipped,
/// so this works on any subset of the cast.
pub fn seed_relationships(world: &mut WorldState) {
    for &(from, to, field, value) in OPENING {
        let (Some(a), Some(b)) = (world.agents().id_of(from), world.agents().id_of(to)) else {
            continue;
        };
        world.matrix_mut().set(a, b, field, value);
    }
}
