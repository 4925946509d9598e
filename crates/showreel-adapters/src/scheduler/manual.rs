//! Manual scheduler for deterministic tests.
//!
//! Nothing fires on its own; tests call [`ManualScheduler::fire`] to stand
//! in for the passage of one interval.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use showreel_core::{
    application::ports::{Scheduler, TickHandle},
    error::ShowreelResult,
};

struct Registration {
    tick: Box<dyn FnMut() + Send>,
    cancelled: Arc<AtomicBool>,
}

/// Fires registered ticks only when told to.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Arc<Mutex<Vec<Registration>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire every live registration once, in registration order.
    pub fn fire(&self) {
        for reg in self.inner.lock().iter_mut() {
            if !reg.cancelled.load(Ordering::SeqCst) {
                (reg.tick)();
            }
        }
    }

    /// Number of registrations that have not been cancelled.
    pub fn live(&self) -> usize {
        self.inner
            .lock()
            .iter()
            .filter(|r| !r.cancelled.load(Ordering::SeqCst))
            .count()
    }
}

impl Scheduler for ManualScheduler {
    fn every(
        &self,
        _interval: Duration,
        tick: Box<dyn FnMut() + Send>,
    ) -> ShowreelResult<Box<dyn TickHandle>> {
        let cancelled = Arc::new(AtomicBool::new(false));
        self.inner.lock().push(Registration {
            tick,
            cancelled: Arc::clone(&cancelled),
        });
        Ok(Box::new(ManualHandle { cancelled }))
    }
}

struct ManualHandle {
    cancelled: Arc<AtomicBool>,
}

impl TickHandle for ManualHandle {
    fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn fires_only_on_demand() {
        let scheduler = ManualScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let ticks = Arc::clone(&counter);

        let _handle = scheduler
            .every(
                Duration::from_millis(1),
                Box::new(move || {
                    ticks.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        scheduler.fire();
        scheduler.fire();
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn cancelled_registration_never_fires() {
        let scheduler = ManualScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let ticks = Arc::clone(&counter);

        let mut handle = scheduler
            .every(
                Duration::from_millis(1),
                Box::new(move || {
                    ticks.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .unwrap();

        handle.cancel();
        scheduler.fire();
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert_eq!(scheduler.live(), 0);
    }
}
