//! Rule chains: ordered, weighted, first-match-wins decision tables.
//!
//! # Evaluation
//!
//! Rules are tried in order.  For each rule:
//!
//! 1. **Subject.**  Resolve the named peer(s) among `others`.  If a named
//!    subject is absent the rule is skipped without drawing.
//! 2. **Gate.**  [`Gate::Open`] passes.  [`Gate::When`] passes iff its guard
//!    holds.  [`Gate::WhenOrChance`] passes if its guard holds, and otherwise
//!    draws once against its probability.
//! 3. **Picks.**  Each pick either draws against its odds or, with no odds,
//!    fires unconditionally.  The first pick that fires decides.  If none
//!    fires the evaluator moves on to the next rule.
//!
//! When every rule falls through, the agent talks to a uniformly chosen
//! peer, or hides if it has none.
//!
//! Every draw is a single `SimRng::chance`, so the number and order of draws
//! is a pure function of the table and the world.

use hs_core::{ActionKind, AgentId, SimRng};

use crate::{Decision, DecisionContext, DecisionPolicy};

// ── Rule data ─────────────────────────────────────────────────────────────────

/// Who a rule is about.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Subject {
    /// One named peer.
    Named(&'static str),
    /// Two named peers; both must be present.
    Pair(&'static str, &'static str),
    /// Any peer at all; the rule is skipped when there are none.
    AnyOther,
    /// No one in particular.
    Nobody,
}

/// A deterministic relationship test.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Guard {
    /// Actor's suspicion of the first subject is above the threshold.
    Suspicion { above: f64 },
    /// Actor's trust in the first subject is above the threshold.
    Trust { above: f64 },
    /// First subject's suspicion of the second subject is above the threshold.
    SubjectSuspicion { above: f64 },
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Gate {
    Open,
    When(Guard),
    /// Guard, or failing that a lucky draw.
    WhenOrChance(Guard, f64),
}

/// Where a pick's action is pointed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Aim {
    First,
    Second,
    /// A uniformly chosen peer, drawn after the pick fires.
    Random,
    Nobody,
}

/// One weighted outcome of a rule.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pick {
    /// `None` fires without drawing (an "else" branch).
    pub odds:   Option<f64>,
    pub action: ActionKind,
    pub aim:    Aim,
}

impl Pick {
    pub const fn odds(p: f64, action: ActionKind, aim: Aim) -> Self {
        Self { odds: Some(p), action, aim }
    }

    pub const fn always(action: ActionKind, aim: Aim) -> Self {
        Self { odds: None, action, aim }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rule {
    pub subject: Subject,
    pub gate:    Gate,
    pub picks:   &'static [Pick],
}

impl Rule {
    pub const fn new(subject: Subject, gate: Gate, picks: &'static [Pick]) -> Self {
        Self { subject, gate, picks }
    }
}

// ── Evaluator ─────────────────────────────────────────────────────────────────

struct Resolved {
    first:  Option<AgentId>,
    second: Option<AgentId>,
}

fn resolve(subject: Subject, ctx: &DecisionContext<'_>) -> Option<Resolved> {
    match subject {
        Subject::Named(name) => Some(Resolved { first: Some(ctx.find(name)?), second: None }),
        Subject::Pair(a, b) => Some(Resolved {
            first:  Some(ctx.find(a)?),
            second: Some(ctx.find(b)?),
        }),
        Subject::AnyOther if ctx.others.is_empty() => None,
        Subject::AnyOther | Subject::Nobody => Some(Resolved { first: None, second: None }),
    }
}

fn guard_holds(guard: Guard, who: &Resolved, ctx: &DecisionContext<'_>) -> bool {
    match (guard, who.first, who.second) {
        (Guard::Suspicion { above }, Some(a), _) => ctx.suspicion_towards(a) > above,
        (Guard::Trust { above }, Some(a), _) => ctx.trust_towards(a) > above,
        (Guard::SubjectSuspicion { above }, Some(a), Some(b)) => {
            ctx.relationship(a, b).suspicion > above
        }
        _ => false,
    }
}

fn gate_passes(gate: Gate, who: &Resolved, ctx: &DecisionContext<'_>, rng: &mut SimRng) -> bool {
    match gate {
        Gate::Open => true,
        Gate::When(guard) => guard_holds(guard, who, ctx),
        Gate::WhenOrChance(guard, p) => guard_holds(guard, who, ctx) || rng.chance(p),
    }
}

/// Run `rules` against `ctx`, falling back to talking to a random peer.
pub fn evaluate(rules: &[Rule], ctx: &DecisionContext<'_>, rng: &mut SimRng) -> Decision {
    for rule in rules {
        let Some(who) = resolve(rule.subject, ctx) else { continue };
        if !gate_passes(rule.gate, &who, ctx, rng) {
            continue;
        }
        for pick in rule.picks {
            if let Some(p) = pick.odds {
                if !rng.chance(p) {
                    continue;
                }
            }
            let target = match pick.aim {
                Aim::First => who.first,
                Aim::Second => who.second,
                Aim::Random => ctx.random_other(rng),
                Aim::Nobody => None,
            };
            return Decision { action: pick.action, target };
        }
    }
    fallback(ctx, rng)
}

fn fallback(ctx: &DecisionContext<'_>, rng: &mut SimRng) -> Decision {
    match ctx.random_other(rng) {
        Some(peer) => Decision::at(ActionKind::TalkTo, peer),
        None => Decision::hide(),
    }
}

// ── RuleChain ─────────────────────────────────────────────────────────────────

/// A policy backed by an arbitrary static rule table.
///
/// ```rust
/// use hs_behavior::{Aim, Gate, Pick, Rule, RuleChain, Subject};
/// use hs_core::ActionKind;
///
/// static SULK: &[Rule] = &[Rule::new(
///     Subject::Nobody,
///     Gate::Open,
///     &[Pick::odds(0.5, ActionKind::Hide, Aim::Nobody)],
/// )];
///
/// let policy = RuleChain(SULK);
/// assert_eq!(policy.0.len(), 1);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct RuleChain(pub &'static [Rule]);

impl DecisionPolicy for RuleChain {
    fn choose(&self, ctx: &DecisionContext<'_>, rng: &mut SimRng) -> Decision {
        evaluate(self.0, ctx, rng)
    }
}
