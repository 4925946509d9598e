//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Deck lookup failed (unknown ID or empty store).
    #[error("Deck resolution failed: {reason}")]
    DeckResolution { reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Deck store error")]
    StoreLockError,

    /// Carousel state access failed (lock poisoned by a panicking tick).
    #[error("Carousel state error")]
    StateLockError,

    /// The scheduler adapter could not register the timer.
    #[error("Scheduler failed: {reason}")]
    SchedulerFailed { reason: String },

    /// Port/Adapter not configured.
    #[error("Required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DeckResolution { reason } => vec![
                format!("Resolution failed: {}", reason),
                "Try: showreel list to see available decks".into(),
            ],
            Self::StoreLockError | Self::StateLockError => vec![
                "An internal lock was poisoned".into(),
                "This is a bug; please report it".into(),
            ],
            Self::SchedulerFailed { reason } => vec![
                format!("Could not start the auto-advance timer: {}", reason),
                "Run with --no-auto to navigate manually".into(),
            ],
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {}", name),
                "This is likely a configuration error".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DeckResolution { .. } => ErrorCategory::NotFound,
            Self::StoreLockError | Self::StateLockError => ErrorCategory::Internal,
            Self::SchedulerFailed { .. } => ErrorCategory::Internal,
            Self::AdapterNotConfigured { .. } => ErrorCategory::Configuration,
        }
    }
}
