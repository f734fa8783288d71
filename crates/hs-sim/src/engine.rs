//! `DecisionEngine` — turns a decision into consequences.

use hs_behavior::Decision;
use hs_core::{ActionKind, AgentId, Event, Odds, SimRng};
use hs_world::{RelationshipDelta as Delta, WorldState};

/// Applies an action's relationship and health effects and records it.
///
/// Effects only happen when the decision has a target.  An untargeted
/// decision still produces an event; for actions that normally need a
/// target its description names `themselves` and nothing changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecisionEngine {
    odds: Odds,
}

impl DecisionEngine {
    pub fn new(odds: Odds) -> Self {
        Self { odds }
    }

    #[inline]
    pub fn odds(&self) -> &Odds {
        &self.odds
    }

    /// Resolve `decision` for `actor` at the world's current turn.
    pub fn process(
        &self,
        world:    &mut WorldState,
        rng:      &mut SimRng,
        actor:    AgentId,
        decision: Decision,
    ) -> Event {
        let actor_name = world.name_of(actor).to_string();
        let target_name = decision.target.map(|t| world.name_of(t).to_string());
        let description = describe(&actor_name, decision.action, target_name.as_deref());

        if let Some(target) = decision.target {
            self.apply(world, rng, actor, decision.action, target);
        }

        Event::new(world.turn(), actor_name, decision.action, target_name, description)
    }

    fn apply(
        &self,
        world:  &mut WorldState,
        rng:    &mut SimRng,
        actor:  AgentId,
        action: ActionKind,
        target: AgentId,
    ) {
        let m = world.matrix_mut();
        match action {
            ActionKind::TalkTo => {
                m.modify(actor, target, &Delta::new().trust(0.1).love(0.05));
                m.modify(target, actor, &Delta::new().trust(0.05));
            }
            ActionKind::SpyOn => {
                // Discovery is rolled before the spy's own edge moves.
                if rng.chance(self.odds.spy_discovery) {
                    m.modify(target, actor, &Delta::new().suspicion(0.2).trust(-0.1));
                }
                m.modify(actor, target, &Delta::new().suspicion(0.1));
            }
            ActionKind::Betray => {
                m.modify(actor, target, &Delta::new().trust(-0.3).love(-0.2));
                m.modify(target, actor, &Delta::new().trust(-0.4).suspicion(0.3).fear(0.2));
            }
            ActionKind::Accuse => {
                m.modify(actor, target, &Delta::new().suspicion(0.2));
                m.modify(target, actor, &Delta::new().suspicion(0.15).fear(0.1).trust(-0.1));
            }
            ActionKind::Defend => {
                m.modify(actor, target, &Delta::new().trust(0.15).love(0.1));
                m.modify(target, actor, &Delta::new().trust(0.2).love(0.15));
            }
            ActionKind::Attack => {
                m.modify(actor, target, &Delta::new().suspicion(0.3).fear(0.1));
                m.modify(target, actor, &Delta::new().suspicion(0.3).fear(0.3).trust(-0.3));
                if rng.chance(self.odds.injury) {
                    if let Some(victim) = world.agent_mut(target) {
                        victim.state.injure(self.odds.injury_amount);
                    }
                }
            }
            ActionKind::Scheme => {
                m.modify(actor, target, &Delta::new().suspicion(0.15));
                if rng.chance(self.odds.scheme_discovery) {
                    m.modify(target, actor, &Delta::new().suspicion(0.1).trust(-0.1));
                }
            }
            ActionKind::Hide => {}
        }
    }
}

/// Event description for `actor` doing `action` to `target`.
pub fn describe(actor: &str, action: ActionKind, target: Option<&str>) -> String {
    let whom = target.unwrap_or("themselves");
    match action {
        ActionKind::TalkTo => format!("{actor} speaks with {whom}"),
        ActionKind::SpyOn => format!("{actor} spies on {whom}"),
        ActionKind::Betray => format!("{actor} betrays {whom}"),
        ActionKind::Accuse => format!("{actor} accuses {whom}"),
        ActionKind::Defend => format!("{actor} defends {whom}"),
        ActionKind::Attack => format!("{actor} attacks {whom}"),
        ActionKind::Hide => format!("{actor} hides from view"),
        ActionKind::Scheme => match target {
            Some(t) => format!("{actor} schemes against {t}"),
            None => format!("{actor} schemes"),
        },
    }
}
