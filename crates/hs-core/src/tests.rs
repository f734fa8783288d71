//! Unit tests for hs-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(6);
        assert_eq!(id.index(), 6);
        assert_eq!(AgentId::try_from(6usize).unwrap(), id);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(AgentId::default(), AgentId::INVALID);
        assert!(!AgentId::INVALID.is_valid());
        assert!(AgentId(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(3).to_string(), "AgentId(3)");
    }
}

#[cfg(test)]
mod action {
    use crate::ActionKind;

    #[test]
    fn labels_are_snake_case() {
        assert_eq!(ActionKind::TalkTo.as_str(), "talk_to");
        assert_eq!(ActionKind::SpyOn.to_string(), "spy_on");
        assert_eq!(ActionKind::Scheme.as_str(), "scheme");
    }

    #[test]
    fn parse_every_label() {
        for kind in ActionKind::ALL {
            assert_eq!(kind.as_str().parse::<ActionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn parse_unknown_label_fails() {
        assert!("duel".parse::<ActionKind>().is_err());
    }

    #[test]
    fn target_requirements() {
        assert!(!ActionKind::Hide.requires_target());
        assert!(!ActionKind::Scheme.requires_target());
        assert!(ActionKind::Attack.requires_target());
        assert!(ActionKind::TalkTo.requires_target());
    }

    #[test]
    fn covert_actions() {
        assert!(ActionKind::SpyOn.is_covert());
        assert!(ActionKind::Scheme.is_covert());
        assert!(!ActionKind::Accuse.is_covert());
    }
}

#[cfg(test)]
mod turn {
    use crate::{Odds, SimConfig, Turn};

    #[test]
    fn turn_arithmetic() {
        assert_eq!(Turn::ZERO.next(), Turn(1));
        assert_eq!(Turn(4) + 3, Turn(7));
        assert_eq!(Turn(9).since(Turn(4)), 5);
        assert_eq!(Turn(12).to_string(), "12");
    }

    #[test]
    fn default_config() {
        let config = SimConfig::default();
        assert_eq!(config.max_turns, 50);
        assert_eq!(config.last_turn(), Turn(50));
        assert_eq!(config.seed, None);
        assert_eq!(config.turn_delay().as_millis(), 1_000);
        assert_eq!(config.odds, Odds::default());
    }

    #[test]
    fn default_odds() {
        let odds = Odds::default();
        assert_eq!(odds.spy_discovery, 0.3);
        assert_eq!(odds.scheme_discovery, 0.2);
        assert_eq!(odds.injury, 0.3);
        assert_eq!(odds.injury_amount, 0.2);
    }
}

#[cfg(test)]
mod event {
    use crate::{ActionKind, Event, Turn};

    #[test]
    fn targeted_log_line() {
        let e = Event::new(Turn(3), "A", ActionKind::TalkTo, Some("B".into()), "A speaks with B");
        assert_eq!(e.log_line(), "Turn 3: A talk_to -> B - A speaks with B");
    }

    #[test]
    fn untargeted_log_line() {
        let e = Event::new(Turn(1), "Ophelia", ActionKind::Hide, None, "Ophelia hides from view");
        assert_eq!(e.to_string(), "Turn 1: Ophelia hide - Ophelia hides from view");
    }

    #[test]
    fn involves_actor_and_target() {
        let e = Event::new(Turn(2), "Laertes", ActionKind::Attack, Some("Hamlet".into()), "");
        assert!(e.involves("Laertes"));
        assert!(e.involves("Hamlet"));
        assert!(!e.involves("Horatio"));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn chance_extremes() {
        let mut rng = SimRng::new(7);
        for _ in 0..1_000 {
            assert!(rng.chance(1.0));
            assert!(!rng.chance(0.0));
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..100 {
            assert_eq!(a.unit(), b.unit());
        }
    }

    #[test]
    fn unit_in_half_open_range() {
        let mut rng = SimRng::new(1);
        for _ in 0..10_000 {
            let x = rng.unit();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = SimRng::new(5);
        let mut v: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[4]), Some(&4));
    }
}
