//! Cancellable periodic task runner.
//!
//! `SyncScheduler::start` spawns one background thread that runs the job immediately
//! and then on every tick of a fixed interval. Because a single thread drives the job,
//! two runs never overlap; a slow run simply delays the next tick. A failed run is
//! logged and the next tick tries again.
//!
//! Stopping:
//! - `SchedulerHandle::stop` sends a stop message and joins the thread.
//! - Dropping the handle does the same.
//!
//! The stop message is observed between runs, never in the middle of one.
use std::fmt::Display;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Sender, bounded, select, tick};
use log::{debug, error, info};

/// Entry point for starting scheduled jobs.
pub struct SyncScheduler;

impl SyncScheduler {
    /// Starts running `job` every `interval` until the returned handle is stopped.
    pub fn start<F, T, E>(name: &str, interval: Duration, mut job: F) -> SchedulerHandle
    where
        F: FnMut() -> Result<T, E> + Send + 'static,
        T: 'static,
        E: Display + 'static,
    {
        let (stop_tx, stop_rx) = bounded::<()>(1);
        let name = name.to_string();
        info!("Scheduler '{}' started, interval {:?}", name, interval);

        let thread = thread::spawn(move || {
            let ticker = tick(interval);
            let mut runs: u64 = 0;
            loop {
                runs += 1;
                match job() {
                    Ok(_) => debug!("Scheduler '{}': run {} finished", name, runs),
                    Err(e) => error!("Scheduler '{}': run {} failed: {}", name, runs, e),
                }

                select! {
                    recv(stop_rx) -> _ => break,
                    recv(ticker) -> _ => {},
                }
            }
            info!("Scheduler '{}' stopping after {} runs", name, runs);
        });

        SchedulerHandle {
            stop_tx,
            thread: Some(thread),
        }
    }
}

/// Owner of a running scheduler thread.
pub struct SchedulerHandle {
    stop_tx: Sender<()>,
    thread: Option<JoinHandle<()>>,
}

impl SchedulerHandle {
    /// Stops the scheduler and waits for the current run to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    /// Whether the scheduler thread is still alive.
    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    fn shutdown(&mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = self.stop_tx.try_send(());
            if thread.join().is_err() {
                error!("Scheduler thread panicked");
            }
        }
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}
