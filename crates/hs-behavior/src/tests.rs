//! Unit tests for hs-behavior.
//!
//! Rule-evaluator tests use purpose-built tables whose probabilities are
//! 0.0 or 1.0, so their outcomes do not depend on the seed.

use hs_agent::{AgentBuilder, AgentRegistry};
use hs_core::{ActionKind, AgentId, SimRng};
use hs_world::{EdgeField, WorldState};

use crate::{
    Aim, Decision, DecisionPolicy, Gate, Guard, Passive, Persona, Pick, Rule, RuleChain, Subject,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn world(names: &[&str]) -> WorldState {
    let registry =
        AgentRegistry::from_agents(names.iter().map(|n| AgentBuilder::new(*n).build())).unwrap();
    WorldState::new(registry)
}

fn id(w: &WorldState, name: &str) -> AgentId {
    w.agents().id_of(name).unwrap()
}

/// Everyone but `actor`, as the scheduler would hand them over.
fn others(w: &WorldState, actor: AgentId) -> Vec<AgentId> {
    w.living_ids().into_iter().filter(|&a| a != actor).collect()
}

fn decide(policy: &impl DecisionPolicy, w: &WorldState, actor: &str) -> Decision {
    let me = id(w, actor);
    policy.decide(me, w, &others(w, me), &mut SimRng::new(7))
}

// ── DecisionPolicy::decide ───────────────────────────────────────────────────

#[cfg(test)]
mod policy_tests {
    use super::*;

    static ATTACK_ANYONE: &[Rule] = &[Rule::new(
        Subject::AnyOther,
        Gate::Open,
        &[Pick::always(ActionKind::Attack, Aim::Random)],
    )];

    #[test]
    fn nobody_left_means_hide() {
        let w = world(&["A"]);
        assert_eq!(decide(&RuleChain(ATTACK_ANYONE), &w, "A"), Decision::hide());
    }

    #[test]
    fn stale_others_are_filtered() {
        let mut w = world(&["A", "B", "C"]);
        let (a, b, c) = (id(&w, "A"), id(&w, "B"), id(&w, "C"));
        let snapshot = vec![a, b, c];
        w.agent_mut(b).unwrap().state.injure(1.0);

        for seed in 0..20 {
            let d = RuleChain(ATTACK_ANYONE).decide(a, &w, &snapshot, &mut SimRng::new(seed));
            assert_eq!(d, Decision::at(ActionKind::Attack, c));
        }
    }

    #[test]
    fn everyone_dead_but_self_hides() {
        let mut w = world(&["A", "B"]);
        let (a, b) = (id(&w, "A"), id(&w, "B"));
        w.agent_mut(b).unwrap().state.injure(1.0);
        let d = RuleChain(ATTACK_ANYONE).decide(a, &w, &[b], &mut SimRng::new(1));
        assert_eq!(d, Decision::hide());
    }

    #[test]
    fn passive_always_hides() {
        let w = world(&["A", "B"]);
        assert_eq!(decide(&Passive, &w, "A"), Decision::hide());
    }

    #[test]
    fn boxed_policies_delegate() {
        let w = world(&["A", "B"]);
        let boxed: Box<dyn DecisionPolicy> = Box::new(RuleChain(ATTACK_ANYONE));
        assert_eq!(decide(&boxed, &w, "A"), Decision::at(ActionKind::Attack, id(&w, "B")));
    }
}

// ── Rule evaluation ───────────────────────────────────────────────────────────

#[cfg(test)]
mod rule_tests {
    use super::*;

    static ABSENT_SUBJECT: &[Rule] = &[Rule::new(
        Subject::Named("Yorick"),
        Gate::Open,
        &[Pick::always(ActionKind::Attack, Aim::First)],
    )];

    #[test]
    fn absent_subject_skips_to_fallback() {
        let w = world(&["A", "B"]);
        let d = decide(&RuleChain(ABSENT_SUBJECT), &w, "A");
        assert_eq!(d, Decision::at(ActionKind::TalkTo, id(&w, "B")));
    }

    static GUARD_OR_NEVER: &[Rule] = &[Rule::new(
        Subject::Named("B"),
        Gate::WhenOrChance(Guard::Suspicion { above: 0.5 }, 0.0),
        &[Pick::always(ActionKind::Accuse, Aim::First)],
    )];

    static NO_GUARD_OR_ALWAYS: &[Rule] = &[Rule::new(
        Subject::Named("B"),
        Gate::WhenOrChance(Guard::Suspicion { above: 0.5 }, 1.0),
        &[Pick::always(ActionKind::Accuse, Aim::First)],
    )];

    #[test]
    fn guard_alone_opens_the_gate() {
        let mut w = world(&["A", "B", "C"]);
        let (a, b) = (id(&w, "A"), id(&w, "B"));
        w.matrix_mut().set(a, b, EdgeField::Suspicion, 0.6);
        assert_eq!(decide(&RuleChain(GUARD_OR_NEVER), &w, "A"), Decision::at(ActionKind::Accuse, b));
    }

    #[test]
    fn chance_alone_opens_the_gate() {
        let w = world(&["A", "B", "C"]);
        let b = id(&w, "B");
        assert_eq!(
            decide(&RuleChain(NO_GUARD_OR_ALWAYS), &w, "A"),
            Decision::at(ActionKind::Accuse, b)
        );
    }

    #[test]
    fn closed_gate_falls_through() {
        let w = world(&["A", "B"]);
        // Suspicion is 0.0 and the chance never succeeds.
        let d = decide(&RuleChain(GUARD_OR_NEVER), &w, "A");
        assert_eq!(d.action, ActionKind::TalkTo);
    }

    #[test]
    fn guard_threshold_is_strict() {
        let mut w = world(&["A", "B"]);
        let (a, b) = (id(&w, "A"), id(&w, "B"));
        w.matrix_mut().set(a, b, EdgeField::Suspicion, 0.5);
        assert_eq!(decide(&RuleChain(GUARD_OR_NEVER), &w, "A").action, ActionKind::TalkTo);
    }

    static PICKS_MISS_THEN_NEXT_RULE: &[Rule] = &[
        Rule::new(
            Subject::Named("B"),
            Gate::Open,
            &[
                Pick::odds(0.0, ActionKind::Attack, Aim::First),
                Pick::odds(0.0, ActionKind::Betray, Aim::First),
            ],
        ),
        Rule::new(Subject::Named("C"), Gate::Open, &[Pick::always(ActionKind::Defend, Aim::First)]),
    ];

    #[test]
    fn failed_picks_fall_through_to_next_rule() {
        let w = world(&["A", "B", "C"]);
        let d = decide(&RuleChain(PICKS_MISS_THEN_NEXT_RULE), &w, "A");
        assert_eq!(d, Decision::at(ActionKind::Defend, id(&w, "C")));
    }

    static FIRST_SUCCESS_WINS: &[Rule] = &[Rule::new(
        Subject::Named("B"),
        Gate::Open,
        &[
            Pick::odds(0.0, ActionKind::Attack, Aim::First),
            Pick::odds(1.0, ActionKind::SpyOn, Aim::First),
            Pick::always(ActionKind::Betray, Aim::First),
        ],
    )];

    #[test]
    fn first_successful_pick_wins() {
        let w = world(&["A", "B"]);
        assert_eq!(
            decide(&RuleChain(FIRST_SUCCESS_WINS), &w, "A"),
            Decision::at(ActionKind::SpyOn, id(&w, "B"))
        );
    }

    static MEDIATE: &[Rule] = &[Rule::new(
        Subject::Pair("H", "C"),
        Gate::When(Guard::SubjectSuspicion { above: 0.5 }),
        &[Pick::odds(0.0, ActionKind::TalkTo, Aim::First), Pick::always(ActionKind::Defend, Aim::Second)],
    )];

    #[test]
    fn pair_subject_reads_the_subjects_edge() {
        let mut w = world(&["G", "H", "C"]);
        let (h, c) = (id(&w, "H"), id(&w, "C"));
        // Not yet: the guard has no chance fallback.
        assert_eq!(decide(&RuleChain(MEDIATE), &w, "G").action, ActionKind::TalkTo);

        w.matrix_mut().set(h, c, EdgeField::Suspicion, 0.8);
        assert_eq!(decide(&RuleChain(MEDIATE), &w, "G"), Decision::at(ActionKind::Defend, c));
    }

    #[test]
    fn pair_subject_needs_both_present() {
        let mut w = world(&["G", "H", "C"]);
        let (h, c) = (id(&w, "H"), id(&w, "C"));
        w.matrix_mut().set(h, c, EdgeField::Suspicion, 0.8);
        w.agent_mut(c).unwrap().state.injure(1.0);
        assert_eq!(decide(&RuleChain(MEDIATE), &w, "G"), Decision::at(ActionKind::TalkTo, h));
    }

    static SULK: &[Rule] = &[Rule::new(
        Subject::Nobody,
        Gate::Open,
        &[Pick::odds(1.0, ActionKind::Scheme, Aim::Nobody)],
    )];

    #[test]
    fn untargeted_pick_has_no_target() {
        let w = world(&["A", "B"]);
        assert_eq!(decide(&RuleChain(SULK), &w, "A"), Decision::alone(ActionKind::Scheme));
    }
}

// ── Personas ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod persona_tests {
    use super::*;

    #[test]
    fn profiles_match_the_cast() {
        let hamlet = Persona::Hamlet.agent();
        assert_eq!(hamlet.name(), "Hamlet");
        assert_eq!(hamlet.temperament().paranoia(), 0.7);
        assert_eq!(hamlet.state.mood, 0.3);
        assert_eq!(hamlet.goals, vec!["seek_truth", "avenge_father", "survive"]);

        let horatio = Persona::Horatio.profile();
        assert_eq!(horatio.loyalty, 0.95);

        let polonius = Persona::Polonius.agent();
        assert_eq!(polonius.goals.len(), 4);
        assert_eq!(polonius.state.suspicion_level, 0.5);
    }

    #[test]
    fn hamlet_table_constants() {
        let rules = Persona::Hamlet.rules();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].subject, Subject::Named("Claudius"));
        assert_eq!(rules[0].gate, Gate::WhenOrChance(Guard::Suspicion { above: 0.5 }, 0.4));
        assert_eq!(rules[0].picks[0], Pick::odds(0.6, ActionKind::SpyOn, Aim::First));
        assert_eq!(rules[0].picks[1], Pick::always(ActionKind::Accuse, Aim::First));
    }

    #[test]
    fn claudius_has_three_way_split_on_hamlet() {
        let picks = Persona::Claudius.rules()[0].picks;
        let actions: Vec<ActionKind> = picks.iter().map(|p| p.action).collect();
        assert_eq!(actions, vec![ActionKind::SpyOn, ActionKind::Scheme, ActionKind::Attack]);
        assert_eq!(picks[2].odds, None);
    }

    #[test]
    fn no_two_personas_share_a_table() {
        for (i, a) in Persona::ALL.iter().enumerate() {
            for b in &Persona::ALL[i + 1..] {
                assert_ne!(a.rules(), b.rules(), "{a} and {b}");
            }
        }
    }

    #[test]
    fn persona_never_targets_self_or_the_dead() {
        let cast = crate::cast::elsinore();
        let registry = AgentRegistry::from_agents(cast.iter().map(|(a, _)| a.clone())).unwrap();
        let mut w = WorldState::new(registry);
        crate::cast::seed_relationships(&mut w);
        let ophelia = id(&w, "Ophelia");
        w.agent_mut(ophelia).unwrap().state.injure(1.0);

        let mut rng = SimRng::new(99);
        for (agent, persona) in &cast {
            let me = id(&w, agent.name());
            let everyone: Vec<AgentId> = w.agents().ids().collect();
            for _ in 0..200 {
                let d = persona.decide(me, &w, &everyone, &mut rng);
                if let Some(t) = d.target {
                    assert_ne!(t, me);
                    assert_ne!(t, ophelia);
                }
            }
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let w = world(&["Hamlet", "Claudius", "Horatio", "Gertrude"]);
        let me = id(&w, "Hamlet");
        let peers = others(&w, me);
        let run = |seed| {
            let mut rng = SimRng::new(seed);
            (0..50).map(|_| Persona::Hamlet.decide(me, &w, &peers, &mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(run(5), run(5));
    }

    #[test]
    fn parse_by_name() {
        assert_eq!("laertes".parse::<Persona>().unwrap(), Persona::Laertes);
        assert!("Yorick".parse::<Persona>().is_err());
        assert_eq!(Persona::Gertrude.to_string(), "Gertrude");
    }
}

// ── Cast ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cast_tests {
    use crate::cast::{elsinore, seed_relationships};

    use super::*;

    #[test]
    fn seven_distinct_characters() {
        let cast = elsinore();
        assert_eq!(cast.len(), 7);
        let registry = AgentRegistry::from_agents(cast.into_iter().map(|(a, _)| a));
        assert!(registry.is_ok());
    }

    #[test]
    fn opening_relationships_are_directed() {
        let registry =
            AgentRegistry::from_agents(elsinore().into_iter().map(|(a, _)| a)).unwrap();
        let mut w = WorldState::new(registry);
        seed_relationships(&mut w);

        let h_ho = w.relationship("Hamlet", "Horatio").unwrap();
        assert_eq!((h_ho.trust, h_ho.love), (0.9, 0.8));
        let ho_h = w.relationship("Horatio", "Hamlet").unwrap();
        assert_eq!(ho_h.love, 0.85);

        let c_h = w.relationship("Claudius", "Hamlet").unwrap();
        assert_eq!((c_h.suspicion, c_h.fear), (0.6, 0.4));
        assert_eq!(w.relationship("Polonius", "Claudius").unwrap().influence, 0.5);
        // Untouched pairs keep the stranger default.
        assert_eq!(w.relationship("Horatio", "Laertes").unwrap().trust, 0.5);
    }

    #[test]
    fn opening_on_a_partial_cast_skips_missing_agents() {
        let mut w = world(&["Hamlet", "Ophelia"]);
        seed_relationships(&mut w);
        assert_eq!(w.relationship("Hamlet", "Ophelia").unwrap().love, 0.4);
        assert_eq!(w.matrix().len(), 2);
    }
}
