use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Construction Errors
    // ========================================================================
    /// A deck was constructed with zero cards.  The carousel's modular index
    /// arithmetic is undefined over an empty sequence, so this is rejected at
    /// construction rather than discovered at the first advance.
    #[error("Deck '{deck_id}' contains no cards")]
    EmptyDeck { deck_id: String },

    #[error("Invalid deck: {0}")]
    InvalidDeck(String),

    #[error("Invalid card '{title}': {reason}")]
    InvalidCard { title: String, reason: String },

    // ========================================================================
    // Navigation Errors
    // ========================================================================
    /// `jump_to` was called with an index outside `[0, len)`.  Rejected, never
    /// clamped: a bad index means the caller's indicator list and the deck
    /// disagree, which is an integration defect worth surfacing.
    #[error("Card index {index} out of range for deck of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },

    // ========================================================================
    // Parse Errors
    // ========================================================================
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyDeck { deck_id } => vec![
                format!("Deck '{}' has no cards", deck_id),
                "Add at least one [[cards]] entry to the deck file".into(),
            ],
            Self::IndexOutOfRange { index, len } => vec![
                format!("Index {} is out of range; the deck has {} cards", index, len),
                format!("Valid card numbers are 1 through {}", len),
            ],
            Self::UnknownLanguage(lang) => vec![
                format!("'{}' is not a recognised snippet language", lang),
                "Supported: ruby, typescript, javascript, html, css, sql, yaml, bash".into(),
            ],
            Self::UnknownCategory(cat) => vec![
                format!("'{}' is not a recognised category", cat),
                "Supported: database, cloud, server, payment, communication, ai".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyDeck { .. } | Self::InvalidDeck(_) | Self::InvalidCard { .. } => {
                ErrorCategory::Validation
            }
            Self::IndexOutOfRange { .. } => ErrorCategory::Validation,
            Self::UnknownLanguage(_) | Self::UnknownCategory(_) => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
