//! Display ticker
//!
//! While a draw runs, flashes a random name from the live eligible pool at a
//! fixed interval. Purely cosmetic: the winner is picked at stop time by the
//! draw engine. The task is aborted when the ticker is dropped.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rollcall_core::RandomSource;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Handle to a running ticker task
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a ticker on the current tokio runtime
    pub fn spawn<F>(pool: watch::Receiver<Vec<String>>, interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut rng = StdRng::from_entropy();
            let mut timer = tokio::time::interval(interval);
            timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                timer.tick().await;
                let name = {
                    let pool = pool.borrow();
                    if pool.is_empty() {
                        None
                    } else {
                        Some(pool[rng.pick_index(pool.len())].clone())
                    }
                };
                if let Some(name) = name {
                    on_tick(&name);
                }
            }
        });

        tracing::debug!(interval_ms = interval.as_millis() as u64, "Ticker started");
        Self { handle }
    }

    /// Cancel the ticker
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!("Ticker stopped");
    }
}
