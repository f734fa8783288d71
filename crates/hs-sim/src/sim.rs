//! The `Sim` struct and its turn loop.

use std::fmt;
use std::fmt::Write as _;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use hs_agent::Agent;
use hs_behavior::{DecisionPolicy, Persona};
use hs_core::{AgentId, Event, SimConfig, SimRng, Turn};
use hs_world::{Relationship, WorldState};
use tracing::{debug, info, info_span, warn};

use crate::{DecisionEngine, EventLog, SimError, SimObserver, SimResult};

// ── Status ────────────────────────────────────────────────────────────────────

/// Why a simulation ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// Fewer than two agents are left alive.
    TooFewSurvivors { living: usize },
    /// The turn counter reached `max_turns`.
    TurnLimit { max_turns: u64 },
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::TooFewSurvivors { living } => {
                write!(f, "only {living} agent(s) remaining")
            }
            EndReason::TurnLimit { max_turns } => write!(f, "reached maximum turns ({max_turns})"),
        }
    }
}

/// `NotStarted → Running → Ended`.  `Ended` is terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimStatus {
    NotStarted,
    Running,
    Ended(EndReason),
}

impl SimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimStatus::NotStarted => "not_started",
            SimStatus::Running => "running",
            SimStatus::Ended(_) => "ended",
        }
    }
}

impl fmt::Display for SimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimStatus::Ended(reason) => write!(f, "ended: {reason}"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Cloneable handle that asks a [`Sim::run`] loop to pause after the current
/// turn.
#[derive(Clone, Debug)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The court simulation.
///
/// Owns the world, one policy per agent (indexed by `AgentId`), the decision
/// engine, the run's only RNG, and the event history.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: DecisionPolicy = Persona> {
    /// Turn limit, seed, pacing, and resolution odds.
    pub config: SimConfig,

    pub(crate) world:    WorldState,
    pub(crate) policies: Vec<P>,
    pub(crate) engine:   DecisionEngine,
    pub(crate) rng:      SimRng,
    pub(crate) log:      EventLog,
    pub(crate) status:   SimStatus,
    pub(crate) stop:     Arc<AtomicBool>,
}

impl<P: DecisionPolicy> Sim<P> {
    // ── Drivers ───────────────────────────────────────────────────────────

    /// Play one full turn and return its events.
    ///
    /// Fails with [`SimError::Ended`] once the simulation has ended.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Vec<Event>> {
        if let SimStatus::Ended(reason) = self.status {
            return Err(SimError::Ended(reason));
        }
        self.status = SimStatus::Running;

        let turn = self.world.advance_turn();
        let span = info_span!("turn", n = turn.0);
        let _enter = span.enter();
        observer.on_turn_start(turn);

        let mut order = self.world.living_ids();
        self.rng.shuffle(&mut order);
        let first = self.log.len();

        for &actor in &order {
            // Killed earlier this turn.
            if !self.world.is_alive(actor) {
                continue;
            }
            // Taken from the pre-turn snapshot; may include the newly dead.
            let others: Vec<AgentId> = order.iter().copied().filter(|&id| id != actor).collect();

            let decision =
                self.policies[actor.index()].decide(actor, &self.world, &others, &mut self.rng);
            let target_alive = decision.target.is_some_and(|t| self.world.is_alive(t));
            let event = self.engine.process(&mut self.world, &mut self.rng, actor, decision);
            debug!(actor = %event.actor, action = %event.action, target = ?event.target, "activation");

            if let Some(victim) = decision.target.filter(|&t| target_alive && !self.world.is_alive(t)) {
                if let Some(agent) = self.world.agent(victim) {
                    info!(victim = agent.name(), killer = %event.actor, "agent died");
                    observer.on_death(turn, agent);
                }
            }

            observer.on_event(&event);
            self.log.push(event);
        }

        let events = self.log.since(first).to_vec();
        observer.on_turn_end(turn, &events, &self.world);

        if let Some(reason) = self.end_reason() {
            info!(%reason, "simulation ended");
            self.status = SimStatus::Ended(reason);
            observer.on_sim_end(turn, &self.status);
        }
        Ok(events)
    }

    /// Play turns until the simulation ends, [`stop`](Self::stop) is
    /// called, or the observer reports a fault.
    ///
    /// `max_turns` overrides `config.max_turns` when given.  A stop leaves the
    /// simulation `Running`; calling `run` again resumes it.  Calling `run`
    /// on an ended simulation returns its final status immediately.
    pub fn run<O: SimObserver>(
        &mut self,
        max_turns: Option<u64>,
        observer:  &mut O,
    ) -> SimResult<SimStatus> {
        if !self.prepare_run(max_turns, observer) {
            return Ok(self.status);
        }

        while !self.is_ended() {
            if self.stop.load(Ordering::Acquire) {
                info!(turn = self.world.turn().0, "run paused");
                break;
            }
            self.step(observer)?;
            if let Some(msg) = observer.fault() {
                warn!(%msg, "observer fault; aborting run");
                return Err(SimError::Observer(msg));
            }
        }
        Ok(self.status)
    }

    /// Apply a turn-limit override and clear the stop flag before a run.
    ///
    /// Ends the simulation on the spot when the turn counter has already
    /// reached the limit.  Returns `false` when no turn is left to play.
    pub(crate) fn prepare_run<O: SimObserver>(
        &mut self,
        max_turns: Option<u64>,
        observer:  &mut O,
    ) -> bool {
        if let Some(n) = max_turns {
            self.config.max_turns = n;
        }
        if self.is_ended() {
            return false;
        }
        self.stop.store(false, Ordering::Release);

        if self.world.turn().0 >= self.config.max_turns {
            let reason = EndReason::TurnLimit { max_turns: self.config.max_turns };
            info!(%reason, "simulation ended");
            self.status = SimStatus::Ended(reason);
            observer.on_sim_end(self.world.turn(), &self.status);
            return false;
        }
        true
    }

    /// Ask a running [`run`](Self::run), or a background runner driving
    /// this simulation, to pause after the current turn.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    /// A handle that can stop [`run`](Self::run) from an observer or another
    /// thread.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(Arc::clone(&self.stop))
    }

    fn end_reason(&self) -> Option<EndReason> {
        let living = self.world.agents().living_count();
        if living < 2 {
            return Some(EndReason::TooFewSurvivors { living });
        }
        if self.world.turn().0 >= self.config.max_turns {
            return Some(EndReason::TurnLimit { max_turns: self.config.max_turns });
        }
        None
    }

    // ── State ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn status(&self) -> SimStatus {
        self.status
    }

    #[inline]
    pub fn is_ended(&self) -> bool {
        matches!(self.status, SimStatus::Ended(_))
    }

    #[inline]
    pub fn turn(&self) -> Turn {
        self.world.turn()
    }

    #[inline]
    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// Mutable world access for scenario setup between turns.
    #[inline]
    pub fn world_mut(&mut self) -> &mut WorldState {
        &mut self.world
    }

    #[inline]
    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    #[inline]
    pub fn event_log(&self) -> &EventLog {
        &self.log
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn living_agents(&self) -> Vec<&Agent> {
        self.world.living()
    }

    pub fn agent_by_name(&self, name: &str) -> Option<&Agent> {
        self.world.agent_by_name(name)
    }

    pub fn alliances(&self) -> Vec<(&Agent, &Agent)> {
        self.resolve_pairs(self.world.alliances())
    }

    pub fn conflicts(&self) -> Vec<(&Agent, &Agent)> {
        self.resolve_pairs(self.world.conflicts())
    }

    fn resolve_pairs(&self, pairs: Vec<(AgentId, AgentId)>) -> Vec<(&Agent, &Agent)> {
        pairs
            .into_iter()
            .filter_map(|(a, b)| Some((self.world.agent(a)?, self.world.agent(b)?)))
            .collect()
    }

    /// The `a→b` edge.  Unknown names are [`HsError::AgentNotFound`][hs_core::HsError].
    pub fn relationship(&self, a: &str, b: &str) -> SimResult<Relationship> {
        Ok(self.world.relationship(a, b)?)
    }

    pub fn all_relationships(&self, name: &str) -> SimResult<Vec<(String, Relationship)>> {
        Ok(self.world.all_relationships(name)?)
    }

    pub fn events_for_turn(&self, turn: Turn) -> Vec<&Event> {
        self.log.events_for_turn(turn)
    }

    pub fn recent_events(&self, count: usize) -> &[Event] {
        self.log.recent(count)
    }

    /// Turn number, living agents, alliances, and conflicts as text.
    pub fn summary(&self) -> String {
        let living = self.living_agents();
        let names: Vec<&str> = living.iter().map(|a| a.name()).collect();
        let mut out = format!("=== Turn {} Summary ===\n", self.turn());
        let _ = writeln!(out, "Living agents: {}", living.len());
        let _ = writeln!(out, "  {}", names.join(", "));

        for (title, pairs) in [("Alliances", self.alliances()), ("Conflicts", self.conflicts())] {
            let _ = write!(out, "\n{title}: {}", pairs.len());
            for (a, b) in pairs {
                let _ = write!(out, "\n  {} <-> {}", a.name(), b.name());
            }
            out.push('\n');
        }
        out
    }
}
