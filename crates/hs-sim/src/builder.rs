//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use hs_agent::{Agent, AgentRegistry};
use hs_behavior::{DecisionPolicy, Persona, cast};
use hs_core::{SimConfig, SimRng};
use hs_world::WorldState;
use tracing::info;

use crate::{DecisionEngine, EventLog, Sim, SimError, SimResult, SimStatus};

type WorldSetup = Box<dyn FnOnce(&mut WorldState)>;

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: turn limit, seed, pacing, odds.
/// - At least the agents, each paired with its policy.
///
/// # Optional inputs
///
/// | Method            | Default                                     |
/// |-------------------|---------------------------------------------|
/// | `.with_world(f)`  | No setup beyond the default edges           |
/// | `.rng(r)`         | `SimRng` seeded from `config.seed`          |
///
/// # Example
///
/// ```rust
/// use hs_agent::AgentBuilder;
/// use hs_behavior::Passive;
/// use hs_core::SimConfig;
/// use hs_sim::SimBuilder;
///
/// let sim = SimBuilder::new(SimConfig::default())
///     .agent(AgentBuilder::new("Rosencrantz").build(), Passive)
///     .agent(AgentBuilder::new("Guildenstern").build(), Passive)
///     .build()
///     .unwrap();
/// assert_eq!(sim.living_agents().len(), 2);
/// ```
pub struct SimBuilder<P: DecisionPolicy> {
    config: SimConfig,
    cast:   Vec<(Agent, P)>,
    setup:  Vec<WorldSetup>,
    rng:    Option<SimRng>,
}

impl SimBuilder<Persona> {
    /// The full Elsinore court with its opening relationships.
    pub fn elsinore(config: SimConfig) -> Self {
        SimBuilder::new(config).cast(cast::elsinore()).with_world(cast::seed_relationships)
    }
}

impl<P: DecisionPolicy> SimBuilder<P> {
    pub fn new(config: SimConfig) -> Self {
        Self { config, cast: Vec::new(), setup: Vec::new(), rng: None }
    }

    /// Add one agent driven by `policy`.  Registration order is call order.
    pub fn agent(mut self, agent: Agent, policy: P) -> Self {
        self.cast.push((agent, policy));
        self
    }

    pub fn cast(mut self, cast: impl IntoIterator<Item = (Agent, P)>) -> Self {
        self.cast.extend(cast);
        self
    }

    /// Run `f` on the freshly built world, after default edges exist.
    /// Calls stack in order.
    pub fn with_world(mut self, f: impl FnOnce(&mut WorldState) + 'static) -> Self {
        self.setup.push(Box::new(f));
        self
    }

    /// Use this RNG instead of one derived from `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the configuration, register the cast, and return a
    /// `NotStarted` simulation.
    pub fn build(self) -> SimResult<Sim<P>> {
        validate(&self.config)?;

        let (agents, policies): (Vec<Agent>, Vec<P>) = self.cast.into_iter().unzip();
        let registry = AgentRegistry::from_agents(agents)?;
        let mut world = WorldState::new(registry);
        for setup in self.setup {
            setup(&mut world);
        }

        let rng = self.rng.unwrap_or_else(|| SimRng::from_seed_opt(self.config.seed));
        info!(
            agents = world.agents().len(),
            max_turns = self.config.max_turns,
            seed = ?self.config.seed,
            "simulation built"
        );

        Ok(Sim {
            engine: DecisionEngine::new(self.config.odds),
            config: self.config,
            world,
            policies,
            rng,
            log: EventLog::new(),
            status: SimStatus::NotStarted,
            stop: Arc::new(AtomicBool::new(false)),
        })
    }
}

fn validate(config: &SimConfig) -> SimResult<()> {
    if config.max_turns == 0 {
        return Err(SimError::Config("max_turns must be at least 1".into()));
    }
    let odds = &config.odds;
    for (name, p) in [
        ("spy_discovery", odds.spy_discovery),
        ("scheme_discovery", odds.scheme_discovery),
        ("injury", odds.injury),
        ("injury_amount", odds.injury_amount),
    ] {
        if !(0.0..=1.0).contains(&p) {
            return Err(SimError::Config(format!("odds.{name} = {p} is outside [0, 1]")));
        }
    }
    Ok(())
}
