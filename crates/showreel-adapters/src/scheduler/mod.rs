//! Scheduler adapters.
//!
//! `ThreadScheduler` is the production implementation; `ManualScheduler`
//! fires ticks on demand for deterministic tests.

pub mod manual;
pub mod thread;

pub use manual::ManualScheduler;
pub use thread::ThreadScheduler;
