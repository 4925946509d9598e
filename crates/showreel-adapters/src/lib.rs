//! Infrastructure adapters for Showreel.
//!
//! This crate implements the ports defined in `showreel-core::application::ports`.
//! It contains all external dependencies, threads, and I/O operations.

pub mod builtin_decks;
pub mod deck_loader;
pub mod deck_store;
pub mod scheduler;

// Re-export commonly used adapters
pub use deck_store::InMemoryStore;
pub use scheduler::{ManualScheduler, ThreadScheduler};
