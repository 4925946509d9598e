//! Application layer for Showreel.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CarouselService, DeckService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself.  All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CarouselConfig,
    CarouselService,
    CarouselView,
    DEFAULT_INTERVAL,
    DeckInfo, // DTO for deck metadata
    DeckService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{DeckStore, Scheduler, TickHandle};

pub use error::ApplicationError;
