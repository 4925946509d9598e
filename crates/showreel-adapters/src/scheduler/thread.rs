//! Dedicated-thread scheduler.
//!
//! Each registration owns one worker thread that sleeps on a condvar with a
//! deadline and runs the tick when the deadline passes.  Cancellation sets
//! a flag, wakes the worker, and **joins** it, so once `cancel` returns,
//! no tick is running and none will run again.  An in-flight tick finishes
//! before `cancel` returns; it is never interrupted mid-mutation.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use tracing::{debug, warn};

use showreel_core::{
    application::{ApplicationError, ports::{Scheduler, TickHandle}},
    error::ShowreelResult,
};

type Shared = Arc<(Mutex<bool>, Condvar)>;

/// Spawns one ticker thread per registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadScheduler;

impl ThreadScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for ThreadScheduler {
    fn every(
        &self,
        interval: Duration,
        mut tick: Box<dyn FnMut() + Send>,
    ) -> ShowreelResult<Box<dyn TickHandle>> {
        let shared: Shared = Arc::new((Mutex::new(false), Condvar::new()));
        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name("showreel-ticker".into())
            .spawn(move || {
                let (cancel_flag, wakeup) = &*worker_shared;
                let mut cancelled = cancel_flag.lock();
                // Deadlines are absolute so a slow tick does not drift the
                // cadence.
                let mut deadline = Instant::now() + interval;

                loop {
                    while !*cancelled {
                        if wakeup.wait_until(&mut cancelled, deadline).timed_out() {
                            break;
                        }
                    }
                    if *cancelled {
                        debug!("ticker cancelled");
                        return;
                    }

                    // Run the tick without holding the cancel flag, so a
                    // racing cancel never waits on user code to observe it.
                    drop(cancelled);
                    tick();
                    deadline += interval;
                    cancelled = cancel_flag.lock();
                }
            })
            .map_err(|e| ApplicationError::SchedulerFailed {
                reason: format!("failed to spawn ticker thread: {e}"),
            })?;

        Ok(Box::new(ThreadHandle {
            shared,
            worker: Some(worker),
        }))
    }
}

struct ThreadHandle {
    shared: Shared,
    worker: Option<JoinHandle<()>>,
}

impl TickHandle for ThreadHandle {
    fn cancel(&mut self) {
        let (cancel_flag, wakeup) = &*self.shared;
        *cancel_flag.lock() = true;
        wakeup.notify_one();

        // Join makes cancellation authoritative: after this returns, the
        // worker has exited and no further tick can fire.
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("ticker thread panicked during a tick");
            }
        }
    }
}

impl Drop for ThreadHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
