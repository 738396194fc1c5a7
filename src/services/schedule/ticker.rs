use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration as StdDuration;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use super::clock::Clock;
use crate::models::countdown::RemainingBreakdown;
use crate::services::countdown::CountdownEngine;

/// One refresh pushed to the render callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub at: DateTime<Local>,
    pub remaining: Option<RemainingBreakdown>,
}

impl Tick {
    pub fn is_elapsed(&self) -> bool {
        self.remaining.is_none()
    }
}

/// Fixed-interval refresh loop for continuously visible surfaces.
///
/// The loop ends by itself after delivering the first elapsed tick, since the
/// target never moves and there is nothing left to compute.
pub struct RefreshTicker<C> {
    engine: CountdownEngine,
    clock: C,
    interval: StdDuration,
    max_ticks: Option<u64>,
}

impl<C: Clock + 'static> RefreshTicker<C> {
    pub fn new(engine: CountdownEngine, clock: C, interval: StdDuration) -> Self {
        Self {
            engine,
            clock,
            interval,
            max_ticks: None,
        }
    }

    /// Stop after `limit` ticks even if the target is still ahead. A limit of
    /// zero ends the loop before the clock is ever read.
    pub fn with_max_ticks(mut self, limit: u64) -> Self {
        self.max_ticks = Some(limit);
        self
    }

    /// Starts the loop on a background thread. The first tick fires immediately.
    pub fn spawn<F>(self, mut render: F) -> Result<TickerHandle>
    where
        F: FnMut(Tick) + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let Self {
            engine,
            clock,
            interval,
            max_ticks,
        } = self;

        let thread = thread::Builder::new()
            .name("countdown-ticker".to_string())
            .spawn(move || {
                let mut delivered = 0u64;
                if max_ticks == Some(0) {
                    log::debug!("Ticker started with a zero tick limit");
                    return delivered;
                }
                loop {
                    let at = clock.now();
                    let tick = Tick {
                        at,
                        remaining: engine.remaining(at),
                    };
                    render(tick);
                    delivered += 1;

                    if tick.is_elapsed() {
                        log::info!("Countdown reached its target; ticker stopping");
                        break;
                    }
                    if max_ticks.is_some_and(|limit| delivered >= limit) {
                        log::debug!("Ticker reached its limit of {} ticks", delivered);
                        break;
                    }

                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => continue,
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                            log::debug!("Ticker stopped after {} ticks", delivered);
                            break;
                        }
                    }
                }
                delivered
            })
            .context("failed to spawn countdown ticker thread")?;

        Ok(TickerHandle {
            stop_tx: Some(stop_tx),
            thread: Some(thread),
        })
    }
}

/// Owner of a running ticker. Dropping it stops the loop.
pub struct TickerHandle {
    stop_tx: Option<Sender<()>>,
    thread: Option<JoinHandle<u64>>,
}

impl TickerHandle {
    /// Whether the loop has ended on its own (elapsed or tick limit).
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, |thread| thread.is_finished())
    }

    /// Cancels the loop and returns how many ticks were delivered.
    pub fn stop(mut self) -> u64 {
        if let Some(stop_tx) = self.stop_tx.take() {
            // The loop may already be gone; a closed channel is fine.
            let _ = stop_tx.send(());
        }
        self.join_thread()
    }

    /// Waits for the loop to end on its own and returns how many ticks were delivered.
    pub fn join(mut self) -> u64 {
        self.join_thread()
    }

    fn join_thread(&mut self) -> u64 {
        match self.thread.take() {
            Some(thread) => thread.join().unwrap_or_else(|_| {
                log::error!("Countdown ticker thread panicked");
                0
            }),
            None => 0,
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.stop_tx.take();
        self.join_thread();
    }
}
