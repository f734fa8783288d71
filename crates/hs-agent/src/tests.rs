//! Unit tests for hs-agent.

#[cfg(test)]
mod temperament_tests {
    use crate::Temperament;

    #[test]
    fn values_are_clamped() {
        let t = Temperament::new(1.7, -0.2, 0.4);
        assert_eq!(t.aggression(), 1.0);
        assert_eq!(t.loyalty(), 0.0);
        assert_eq!(t.paranoia(), 0.4);
    }

    #[test]
    fn nan_saturates_high() {
        assert_eq!(crate::temperament::unit_clamp(f64::NAN), 1.0);
        assert_eq!(Temperament::new(f64::NAN, 0.2, 0.3).aggression(), 1.0);
    }

    #[test]
    fn default_is_neutral() {
        let t = Temperament::default();
        assert_eq!((t.aggression(), t.loyalty(), t.paranoia()), (0.5, 0.5, 0.5));
    }
}

#[cfg(test)]
mod state_tests {
    use crate::AgentState;

    #[test]
    fn defaults() {
        let s = AgentState::default();
        assert_eq!(s.mood, 0.5);
        assert_eq!(s.health, 1.0);
        assert_eq!(s.suspicion_level, 0.0);
        assert!(s.is_alive);
        assert!(!s.is_hidden);
    }

    #[test]
    fn injury_floors_at_zero_and_kills_once() {
        let mut s = AgentState { health: 0.2, ..AgentState::default() };
        assert!(s.injure(0.2));
        assert_eq!(s.health, 0.0);
        assert!(!s.is_alive);
        // A second blow on a corpse reports nothing new.
        assert!(!s.injure(0.2));
        assert_eq!(s.health, 0.0);
    }

    #[test]
    fn accessors_follow_injury() {
        let mut s = AgentState { health: 0.3, ..AgentState::default() };
        assert_eq!((s.health(), s.is_alive()), (0.3, true));
        s.injure(0.5);
        assert_eq!((s.health(), s.is_alive()), (0.0, false));
    }

    #[test]
    fn non_lethal_injury() {
        let mut s = AgentState::default();
        assert!(!s.injure(0.2));
        assert!((s.health - 0.8).abs() < 1e-12);
        assert!(s.is_alive);
    }

    #[test]
    fn overkill_is_clamped() {
        let mut s = AgentState { health: 0.1, ..AgentState::default() };
        assert!(s.injure(0.5));
        assert_eq!(s.health, 0.0);
    }

    #[test]
    fn setters_clamp() {
        let mut s = AgentState::default();
        s.set_mood(3.0);
        s.set_suspicion_level(-1.0);
        assert_eq!(s.mood, 1.0);
        assert_eq!(s.suspicion_level, 0.0);
    }
}

#[cfg(test)]
mod builder_tests {
    use hs_core::AgentId;

    use crate::AgentBuilder;

    #[test]
    fn default_goal_is_survive() {
        let a = AgentBuilder::new("Yorick").build();
        assert_eq!(a.goals, vec!["survive".to_string()]);
        assert_eq!(a.id(), AgentId::INVALID);
    }

    #[test]
    fn fields_are_applied() {
        let a = AgentBuilder::new("Hamlet")
            .temperament(0.4, 0.6, 0.7)
            .goals(["seek_truth", "avenge_father", "survive"])
            .mood(0.3)
            .suspicion_level(0.6)
            .build();
        assert_eq!(a.name(), "Hamlet");
        assert_eq!(a.temperament().paranoia(), 0.7);
        assert_eq!(a.goals.len(), 3);
        assert_eq!(a.state.mood, 0.3);
        assert_eq!(a.state.suspicion_level, 0.6);
    }

    #[test]
    fn zero_health_starts_dead() {
        let a = AgentBuilder::new("Ghost").health(0.0).build();
        assert!(!a.is_alive());
    }
}

#[cfg(test)]
mod registry_tests {
    use hs_core::{AgentId, HsError};

    use crate::{AgentBuilder, AgentRegistry};

    fn trio() -> AgentRegistry {
        AgentRegistry::from_agents(["A", "B", "C"].map(|n| AgentBuilder::new(n).build())).unwrap()
    }

    #[test]
    fn ids_follow_insertion_order() {
        let reg = trio();
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.id_of("A"), Some(AgentId(0)));
        assert_eq!(reg.id_of("C"), Some(AgentId(2)));
        assert_eq!(reg.get(AgentId(1)).unwrap().name(), "B");
        assert_eq!(reg.get(AgentId(1)).unwrap().id(), AgentId(1));
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut reg = trio();
        let err = reg.insert(AgentBuilder::new("B").build()).unwrap_err();
        assert!(matches!(err, HsError::DuplicateAgent(name) if name == "B"));
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn unknown_name_is_absent() {
        let reg = trio();
        assert!(reg.by_name("Fortinbras").is_none());
        assert!(matches!(reg.require("Fortinbras"), Err(HsError::AgentNotFound(_))));
        assert_eq!(reg.name_of(AgentId(42)), "?");
    }

    #[test]
    fn dead_agents_stay_registered_but_not_living() {
        let mut reg = trio();
        let b = reg.id_of("B").unwrap();
        reg.get_mut(b).unwrap().state.injure(1.0);

        assert_eq!(reg.len(), 3);
        assert!(reg.by_name("B").is_some());
        assert!(!reg.is_alive(b));
        assert_eq!(reg.living_ids(), vec![AgentId(0), AgentId(2)]);
        assert_eq!(reg.living_count(), 2);
    }
}
