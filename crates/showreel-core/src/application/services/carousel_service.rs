//! Carousel Service - main application orchestrator.
//!
//! This service owns one carousel and serialises every trigger that can
//! move it:
//! 1. Timer ticks from the injected [`Scheduler`]
//! 2. Explicit navigation (`advance`, `jump_to`)
//! 3. Drag gestures (`drag_end`)
//!
//! All three funnel through one mutex, so transitions are atomic steps that
//! never interleave mid-mutation.  Whichever trigger takes the lock first
//! wins; there is no other ordering guarantee, and none is needed.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::{Scheduler, TickHandle}},
    domain::{Card, Carousel, Deck, Direction, SwipeConfig},
    error::ShowreelResult,
};

/// Interval between automatic advances, matching the original widget.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(8000);

/// Carousel tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Auto-advance cadence.
    pub interval: Duration,
    /// Drag-gesture sensitivity.
    pub swipe: SwipeConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            swipe: SwipeConfig::default(),
        }
    }
}

/// Read-only snapshot of the carousel, handed to observers after every
/// transition.  Built while the state lock is held, delivered after it is
/// released, so observers may freely call back into the service.
#[derive(Debug, Clone)]
pub struct CarouselView {
    pub index: usize,
    pub len: usize,
    pub pending: Option<Direction>,
    pub card: Card,
    pub deck_name: String,
}

type Observer = Arc<dyn Fn(&CarouselView) + Send + Sync>;

/// Main carousel service.
///
/// Auto-advance starts on construction: the timer fires one forward step
/// per interval, unconditionally, and does NOT pause on manual interaction
/// (faithful to the original widget; callers wanting pause-on-interaction
/// can `stop()`/`start()` around their input handling).
pub struct CarouselService {
    state: Arc<Mutex<Carousel>>,
    scheduler: Box<dyn Scheduler>,
    interval: Duration,
    handle: Option<Box<dyn TickHandle>>,
    observer: Arc<Mutex<Option<Observer>>>,
}

impl CarouselService {
    /// Create a service and start its auto-advance timer immediately.
    #[instrument(
        skip_all,
        fields(deck = %deck.id, cards = deck.len(), interval_ms = config.interval.as_millis())
    )]
    pub fn new(
        deck: Deck,
        scheduler: Box<dyn Scheduler>,
        config: CarouselConfig,
    ) -> ShowreelResult<Self> {
        let carousel = Carousel::with_swipe(deck, config.swipe);
        let mut service = Self {
            state: Arc::new(Mutex::new(carousel)),
            scheduler,
            interval: config.interval,
            handle: None,
            observer: Arc::new(Mutex::new(None)),
        };
        service.start()?;
        info!("Carousel started");
        Ok(service)
    }

    // -------------------------------------------------------------------------
    // Timer lifecycle
    // -------------------------------------------------------------------------

    /// Start the auto-advance timer.  Idempotent: a running timer is left
    /// alone.
    pub fn start(&mut self) -> ShowreelResult<()> {
        if self.handle.is_some() {
            return Ok(());
        }

        let state = Arc::clone(&self.state);
        let observer = Arc::clone(&self.observer);

        let tick = Box::new(move || {
            let view = {
                let Ok(mut carousel) = state.lock() else {
                    warn!("carousel state poisoned, skipping tick");
                    return;
                };
                carousel.advance(Direction::Forward);
                snapshot(&carousel)
            };
            notify(&observer, &view);
        });

        self.handle = Some(self.scheduler.every(self.interval, tick)?);
        Ok(())
    }

    /// Stop the auto-advance timer.  Idempotent.
    ///
    /// Cancellation is synchronous and authoritative: once this returns, no
    /// further timed advance runs, even one that was already scheduled.
    pub fn stop(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.cancel();
            info!("Auto-advance stopped");
        }
    }

    /// Whether the auto-advance timer is currently registered.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Step one card in `direction`, wrapping at either end.
    pub fn advance(&self, direction: Direction) -> ShowreelResult<CarouselView> {
        let view = {
            let mut carousel = self.lock()?;
            carousel.advance(direction);
            snapshot(&carousel)
        };
        notify(&self.observer, &view);
        Ok(view)
    }

    /// Jump straight to `index`; out-of-range indices are rejected.
    pub fn jump_to(&self, index: usize) -> ShowreelResult<CarouselView> {
        let view = {
            let mut carousel = self.lock()?;
            carousel.jump_to(index)?;
            snapshot(&carousel)
        };
        notify(&self.observer, &view);
        Ok(view)
    }

    /// Resolve a drag gesture; returns the direction applied, if any.
    pub fn drag_end(&self, offset: f32, velocity: f32) -> ShowreelResult<Option<Direction>> {
        let (applied, view) = {
            let mut carousel = self.lock()?;
            let applied = carousel.drag_end(offset, velocity);
            (applied, snapshot(&carousel))
        };
        if applied.is_some() {
            notify(&self.observer, &view);
        }
        Ok(applied)
    }

    // -------------------------------------------------------------------------
    // Observation
    // -------------------------------------------------------------------------

    /// Current state snapshot.
    pub fn view(&self) -> ShowreelResult<CarouselView> {
        Ok(snapshot(&*self.lock()?))
    }

    pub fn active_index(&self) -> ShowreelResult<usize> {
        Ok(self.lock()?.active_index())
    }

    pub fn pending_direction(&self) -> ShowreelResult<Option<Direction>> {
        Ok(self.lock()?.pending_direction())
    }

    /// Register the rendering callback, invoked after every transition
    /// (including timer ticks).  Replaces any previous observer.
    pub fn set_observer(&self, f: impl Fn(&CarouselView) + Send + Sync + 'static) {
        if let Ok(mut slot) = self.observer.lock() {
            *slot = Some(Arc::new(f));
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn lock(&self) -> ShowreelResult<MutexGuard<'_, Carousel>> {
        self.state
            .lock()
            .map_err(|_| ApplicationError::StateLockError.into())
    }
}

impl Drop for CarouselService {
    fn drop(&mut self) {
        // Teardown cancels the pending timer registration; no tick outlives
        // the service.
        self.stop();
    }
}

fn snapshot(carousel: &Carousel) -> CarouselView {
    CarouselView {
        index: carousel.active_index(),
        len: carousel.len(),
        pending: carousel.pending_direction(),
        card: carousel.active_card().clone(),
        deck_name: carousel.deck().name.clone(),
    }
}

fn notify(observer: &Arc<Mutex<Option<Observer>>>, view: &CarouselView) {
    let callback = match observer.lock() {
        Ok(slot) => slot.clone(),
        Err(_) => return,
    };
    if let Some(callback) = callback {
        callback(view);
    }
}
