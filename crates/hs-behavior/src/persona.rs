//! The seven personalities of the Danish court.

use std::fmt;
use std::str::FromStr;

use hs_agent::{Agent, AgentBuilder};
use hs_core::{ActionKind::*, HsError, SimRng};

use crate::rules::{evaluate, Aim, Gate, Guard, Pick, Rule, Subject};
use crate::{Decision, DecisionContext, DecisionPolicy};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Persona {
    Hamlet,
    Claudius,
    Gertrude,
    Ophelia,
    Horatio,
    Laertes,
    Polonius,
}

/// Starting traits, goals, and state of a persona.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Profile {
    pub aggression:      f64,
    pub loyalty:         f64,
    pub paranoia:        f64,
    pub goals:           &'static [&'static str],
    pub mood:            f64,
    pub suspicion_level: f64,
}

impl Persona {
    pub const ALL: [Persona; 7] = [
        Persona::Hamlet,
        Persona::Claudius,
        Persona::Gertrude,
        Persona::Ophelia,
        Persona::Horatio,
        Persona::Laertes,
        Persona::Polonius,
    ];

    /// The character's name, which is also the agent name it expects.
    pub fn name(self) -> &'static str {
        match self {
            Persona::Hamlet => "Hamlet",
            Persona::Claudius => "Claudius",
            Persona::Gertrude => "Gertrude",
            Persona::Ophelia => "Ophelia",
            Persona::Horatio => "Horatio",
            Persona::Laertes => "Laertes",
            Persona::Polonius => "Polonius",
        }
    }

    pub fn profile(self) -> Profile {
        match self {
            Persona::Hamlet => profile(0.4, 0.6, 0.7, &["seek_truth", "avenge_father", "survive"], 0.3, 0.6),
            Persona::Claudius => profile(0.7, 0.2, 0.9, &["gain_power", "maintain_power", "survive"], 0.6, 0.8),
            Persona::Gertrude => {
                profile(0.2, 0.7, 0.4, &["maintain_stability", "protect_hamlet", "survive"], 0.5, 0.3)
            }
            Persona::Ophelia => profile(0.1, 0.8, 0.3, &["avoid_conflict", "protect_family", "survive"], 0.4, 0.2),
            Persona::Horatio => profile(0.3, 0.95, 0.2, &["protect_hamlet", "seek_truth", "survive"], 0.6, 0.3),
            Persona::Laertes => profile(0.8, 0.6, 0.5, &["avenge_father", "protect_ophelia", "survive"], 0.4, 0.6),
            Persona::Polonius => {
                profile(0.3, 0.5, 0.6, &["spy", "serve_claudius", "protect_family", "survive"], 0.5, 0.5)
            }
        }
    }

    /// An unregistered agent carrying this persona's profile.
    pub fn agent(self) -> Agent {
        let p = self.profile();
        AgentBuilder::new(self.name())
            .temperament(p.aggression, p.loyalty, p.paranoia)
            .goals(p.goals.iter().copied())
            .mood(p.mood)
            .suspicion_level(p.suspicion_level)
            .build()
    }

    /// The ordered rule table this persona decides by.
    pub fn rules(self) -> &'static [Rule] {
        match self {
            Persona::Hamlet => HAMLET,
            Persona::Claudius => CLAUDIUS,
            Persona::Gertrude => GERTRUDE,
            Persona::Ophelia => OPHELIA,
            Persona::Horatio => HORATIO,
            Persona::Laertes => LAERTES,
            Persona::Polonius => POLONIUS,
        }
    }
}

impl DecisionPolicy for Persona {
    fn choose(&self, ctx: &DecisionContext<'_>, rng: &mut SimRng) -> Decision {
        evaluate(self.rules(), ctx, rng)
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Persona {
    type Err = HsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Persona::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| HsError::Parse(format!("unknown persona `{s}`")))
    }
}

const fn profile(
    aggression:      f64,
    loyalty:         f64,
    paranoia:        f64,
    goals:           &'static [&'static str],
    mood:            f64,
    suspicion_level: f64,
) -> Profile {
    Profile { aggression, loyalty, paranoia, goals, mood, suspicion_level }
}

// ── Rule tables ───────────────────────────────────────────────────────────────

// Seeks the truth about Claudius; leans on Horatio.
static HAMLET: &[Rule] = &[
    Rule::new(
        Subject::Named("Claudius"),
        Gate::WhenOrChance(Guard::Suspicion { above: 0.5 }, 0.4),
        &[Pick::odds(0.6, SpyOn, Aim::First), Pick::always(Accuse, Aim::First)],
    ),
    Rule::new(
        Subject::Named("Horatio"),
        Gate::WhenOrChance(Guard::Trust { above: 0.5 }, 0.5),
        &[Pick::always(TalkTo, Aim::First)],
    ),
    Rule::new(
        Subject::Nobody,
        Gate::Open,
        &[Pick::odds(0.3, Scheme, Aim::Nobody), Pick::odds(0.2, Hide, Aim::Nobody)],
    ),
];

// Paranoid about Hamlet; keeps Polonius and Gertrude close.
static CLAUDIUS: &[Rule] = &[
    Rule::new(
        Subject::Named("Hamlet"),
        Gate::WhenOrChance(Guard::Suspicion { above: 0.4 }, 0.5),
        &[
            Pick::odds(0.4, SpyOn, Aim::First),
            Pick::odds(0.3, Scheme, Aim::First),
            Pick::always(Attack, Aim::First),
        ],
    ),
    Rule::new(Subject::Named("Polonius"), Gate::Open, &[Pick::odds(0.3, TalkTo, Aim::First)]),
    Rule::new(Subject::Named("Gertrude"), Gate::Open, &[Pick::odds(0.3, TalkTo, Aim::First)]),
    Rule::new(Subject::Nobody, Gate::Open, &[Pick::odds(0.4, Scheme, Aim::Nobody)]),
];

// Mediates between son and husband when they are at odds.
static GERTRUDE: &[Rule] = &[
    Rule::new(
        Subject::Pair("Hamlet", "Claudius"),
        Gate::When(Guard::SubjectSuspicion { above: 0.5 }),
        &[Pick::odds(0.5, TalkTo, Aim::First), Pick::always(TalkTo, Aim::Second)],
    ),
    Rule::new(
        Subject::Named("Hamlet"),
        Gate::Open,
        &[Pick::odds(0.4, Defend, Aim::First), Pick::odds(0.3, TalkTo, Aim::First)],
    ),
    Rule::new(Subject::Named("Claudius"), Gate::Open, &[Pick::odds(0.3, TalkTo, Aim::First)]),
];

// Stays with family; withdraws from conflict.
static OPHELIA: &[Rule] = &[
    Rule::new(Subject::Named("Laertes"), Gate::Open, &[Pick::odds(0.4, TalkTo, Aim::First)]),
    Rule::new(Subject::Named("Polonius"), Gate::Open, &[Pick::odds(0.3, TalkTo, Aim::First)]),
    Rule::new(Subject::Named("Hamlet"), Gate::Open, &[Pick::odds(0.3, TalkTo, Aim::First)]),
    Rule::new(Subject::Nobody, Gate::Open, &[Pick::odds(0.4, Hide, Aim::Nobody)]),
];

static HORATIO: &[Rule] = &[
    Rule::new(
        Subject::Named("Hamlet"),
        Gate::Open,
        &[Pick::odds(0.6, TalkTo, Aim::First), Pick::odds(0.3, Defend, Aim::First)],
    ),
    Rule::new(Subject::Named("Claudius"), Gate::Open, &[Pick::odds(0.2, SpyOn, Aim::First)]),
];

// Guards his sister, hunts Hamlet.
static LAERTES: &[Rule] = &[
    Rule::new(
        Subject::Named("Ophelia"),
        Gate::Open,
        &[Pick::odds(0.4, Defend, Aim::First), Pick::odds(0.3, TalkTo, Aim::First)],
    ),
    Rule::new(
        Subject::Named("Hamlet"),
        Gate::WhenOrChance(Guard::Suspicion { above: 0.5 }, 0.3),
        &[Pick::odds(0.5, Attack, Aim::First), Pick::always(Accuse, Aim::First)],
    ),
    Rule::new(Subject::Named("Claudius"), Gate::Open, &[Pick::odds(0.2, TalkTo, Aim::First)]),
];

// Spies for the king.
static POLONIUS: &[Rule] = &[
    Rule::new(Subject::Named("Hamlet"), Gate::Open, &[Pick::odds(0.5, SpyOn, Aim::First)]),
    Rule::new(Subject::Named("Claudius"), Gate::Open, &[Pick::odds(0.3, TalkTo, Aim::First)]),
    Rule::new(Subject::Named("Ophelia"), Gate::Open, &[Pick::odds(0.2, TalkTo, Aim::First)]),
    Rule::new(Subject::AnyOther, Gate::Open, &[Pick::odds(0.3, SpyOn, Aim::Random)]),
];
