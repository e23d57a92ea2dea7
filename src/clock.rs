//! The simulation clock: one background thread driving generation advance.
//!
//! The clock wakes on a fixed period, takes the board's exclusive guard via
//! [`GridState::advance`], and goes back to sleep. It is the only caller of
//! `advance` in a running system; snapshots and injections contend with it on
//! the board's guard but never wait longer than one advance takes.
//!
//! Shutdown is explicit: [`SimulationClock::stop`] signals the thread over a
//! channel and joins it, so tests and orderly process exit never leave a
//! ticker running. Dropping the handle without calling `stop` still signals
//! the thread; it just does not wait for it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, select, tick, Sender};

use crate::board::GridState;

/// Handle to the running clock thread.
pub struct SimulationClock {
    shutdown: Sender<()>,
    thread: Option<JoinHandle<()>>,
    generations: Arc<AtomicU64>,
}

impl SimulationClock {
    /// Spawns the clock thread, advancing `state` every `period`.
    ///
    /// The first advance happens one full period after start, matching a
    /// sleep-then-advance loop. `period` must be nonzero.
    pub fn start(state: Arc<GridState>, period: Duration) -> Self {
        assert!(!period.is_zero(), "tick period must be nonzero");
        let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
        let generations = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&generations);

        let thread = thread::spawn(move || {
            let ticker = tick(period);
            loop {
                select! {
                    recv(ticker) -> _ => {
                        state.advance();
                        counter.fetch_add(1, Ordering::Relaxed);
                    }
                    recv(shutdown_rx) -> _ => return,
                }
            }
        });

        Self {
            shutdown: shutdown_tx,
            thread: Some(thread),
            generations,
        }
    }

    /// Generations advanced since start.
    pub fn generations(&self) -> u64 {
        self.generations.load(Ordering::Relaxed)
    }

    /// Signals shutdown and joins the clock thread.
    ///
    /// Idempotent with respect to the signal; joining happens at most once.
    pub fn stop(mut self) {
        self.signal();
        if let Some(thread) = self.thread.take() {
            // Re-raise a clock-thread panic on the stopping thread so it is
            // not silently swallowed.
            if let Err(payload) = thread.join() {
                std::panic::resume_unwind(payload);
            }
        }
    }

    fn signal(&self) {
        // Disconnected receiver means the thread already exited.
        let _ = self.shutdown.try_send(());
    }
}

impl Drop for SimulationClock {
    fn drop(&mut self) {
        self.signal();
    }
}
