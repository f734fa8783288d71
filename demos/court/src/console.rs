//! Observer that echoes the run to stdout and forwards to the file writers.

use hs_agent::Agent;
use hs_core::{Event, Turn};
use hs_output::{OutputWriter, SimOutputObserver};
use hs_sim::{SimObserver, SimStatus};
use hs_world::WorldState;

pub type Writers = Vec<Box<dyn OutputWriter + Send>>;

pub struct ConsoleObserver {
    output: SimOutputObserver<Writers>,
    echo:   bool,
}

impl ConsoleObserver {
    pub fn new(writers: Writers, echo: bool) -> Self {
        Self { output: SimOutputObserver::new(writers), echo }
    }

    pub fn finish(&mut self) -> anyhow::Result<()> {
        self.output.finish()?;
        Ok(())
    }
}

impl SimObserver for ConsoleObserver {
    fn on_event(&mut self, event: &Event) {
        if self.echo {
            println!("{event}");
        }
    }

    fn on_death(&mut self, turn: Turn, agent: &Agent) {
        if self.echo {
            println!("Turn {turn}: {} has died", agent.name());
        }
    }

    fn on_turn_end(&mut self, turn: Turn, events: &[Event], world: &WorldState) {
        self.output.on_turn_end(turn, events, world);
    }

    fn on_sim_end(&mut self, turn: Turn, status: &SimStatus) {
        if let (true, SimStatus::Ended(reason)) = (self.echo, status) {
            println!("Simulation ended at turn {turn}: {reason}");
        }
        self.output.on_sim_end(turn, status);
    }

    fn fault(&self) -> Option<String> {
        self.output.fault()
    }
}
