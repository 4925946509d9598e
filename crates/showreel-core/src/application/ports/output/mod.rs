//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `showreel-adapters` crate provides implementations.

use std::time::Duration;

use crate::domain::{Deck, DeckId, Language};
use crate::error::ShowreelResult;

/// Port for deck storage and retrieval.
///
/// Implemented by `showreel_adapters::deck_store::InMemoryStore`, seeded
/// from built-in decks or a `FilesystemDeckLoader` directory.
pub trait DeckStore: Send + Sync {
    /// Get a specific deck by ID.
    fn get(&self, id: &DeckId) -> ShowreelResult<Deck>;

    /// List all available decks.
    fn list(&self) -> ShowreelResult<Vec<Deck>>;

    /// All decks containing at least one card in `language`.
    fn find_by_language(&self, language: Language) -> ShowreelResult<Vec<Deck>>;

    /// Insert or replace a deck.
    fn insert(&self, deck: Deck) -> ShowreelResult<()>;

    /// Remove a deck.
    fn remove(&self, id: &DeckId) -> ShowreelResult<()>;
}

/// Port for repeating-timer registration.
///
/// Implemented by:
/// - `showreel_adapters::scheduler::ThreadScheduler` (production)
/// - `showreel_adapters::scheduler::ManualScheduler` (testing)
///
/// ## Design Notes
///
/// Scheduling is fire-and-forget from the caller's perspective: `every`
/// returns immediately and `tick` runs on whatever execution context the
/// adapter owns.  The returned handle is the only way to stop the timer.
pub trait Scheduler: Send + Sync {
    /// Invoke `tick` once every `interval` until the handle is cancelled.
    fn every(
        &self,
        interval: Duration,
        tick: Box<dyn FnMut() + Send>,
    ) -> ShowreelResult<Box<dyn TickHandle>>;
}

/// Cancellation handle for one timer registration.
///
/// `cancel` is authoritative: once it returns, no further tick runs, even
/// one that was already scheduled.  Implementations must make cancellation
/// happen-before any racing fire (the thread adapter does this by joining
/// its worker).  Dropping the handle must also cancel.
pub trait TickHandle: Send {
    fn cancel(&mut self);
}
