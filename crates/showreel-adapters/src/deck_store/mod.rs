//! Deck storage adapters.

pub mod memory;

pub use memory::InMemoryStore;
