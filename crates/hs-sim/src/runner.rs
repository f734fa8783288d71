//! Background turn driver.
//!
//! # Locking discipline
//!
//! The worker holds the write lock for exactly one [`Sim::step`] and
//! releases it before sleeping, so readers always observe the world between
//! two turns, never halfway through one.  The stop flag is checked only
//! between turns; a turn in progress always completes.

use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use hs_behavior::{DecisionPolicy, Persona};
use tracing::{info, warn};

use crate::{Sim, SimError, SimObserver, SimResult, StopHandle};

/// A simulation shared between a driver thread and readers.
pub type SharedSim<P = Persona> = Arc<RwLock<Sim<P>>>;

pub fn share<P: DecisionPolicy>(sim: Sim<P>) -> SharedSim<P> {
    Arc::new(RwLock::new(sim))
}

/// Steps a [`SharedSim`] on a worker thread with a fixed pacing delay.
///
/// The worker exits when the simulation ends, when [`stop`](Self::stop) or
/// `Sim::stop` is called, or on the first error.  Both stop the same flag.
/// [`join`](Self::join) hands back the number of turns played and the
/// observer.
pub struct BackgroundRunner<O> {
    stop:   StopHandle,
    handle: JoinHandle<SimResult<(u64, O)>>,
}

impl<O: SimObserver + Send + 'static> BackgroundRunner<O> {
    /// Start driving `shared`.  `max_turns` overrides the configured limit.
    ///
    /// The override and the stop-flag reset happen before this returns, so a
    /// stop requested right after `spawn` is never lost.  A simulation whose
    /// turn counter is already at the limit ends without playing a turn.
    pub fn spawn<P: DecisionPolicy>(
        shared:    SharedSim<P>,
        max_turns: Option<u64>,
        delay:     Duration,
        mut observer: O,
    ) -> SimResult<Self> {
        let (stop, playable) = {
            let mut sim = shared.write().map_err(|_| SimError::LockPoisoned)?;
            (sim.stop_handle(), sim.prepare_run(max_turns, &mut observer))
        };
        let flag = stop.clone();
        let handle = thread::spawn(move || {
            if !playable {
                return Ok((0, observer));
            }
            drive(shared, delay, observer, flag)
        });
        Ok(Self { stop, handle })
    }

    /// Ask the worker to exit after the turn in progress.
    pub fn stop(&self) {
        self.stop.stop();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the worker to exit.
    pub fn join(self) -> SimResult<(u64, O)> {
        self.handle.join().map_err(|_| SimError::RunnerPanicked)?
    }
}

fn drive<P: DecisionPolicy, O: SimObserver>(
    shared:       SharedSim<P>,
    delay:        Duration,
    mut observer: O,
    stop:         StopHandle,
) -> SimResult<(u64, O)> {
    info!(delay_ms = delay.as_millis() as u64, "background runner started");

    let mut played = 0u64;
    loop {
        if stop.is_stopped() {
            info!(played, "background runner stopped");
            break;
        }
        let ended = {
            let mut sim = shared.write().map_err(|_| SimError::LockPoisoned)?;
            if sim.is_ended() {
                break;
            }
            sim.step(&mut observer)?;
            played += 1;
            if let Some(msg) = observer.fault() {
                warn!(%msg, "observer fault; background runner exiting");
                return Err(SimError::Observer(msg));
            }
            sim.is_ended()
        };
        if ended {
            info!(played, "background runner finished");
            break;
        }
        thread::sleep(delay);
    }
    Ok((played, observer))
}
