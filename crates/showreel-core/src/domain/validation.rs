use std::collections::HashSet;

use crate::domain::{entities::Deck, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a deck beyond the non-emptiness `Deck::new` already
    /// guarantees: card titles must be present and unique, bodies must not
    /// be blank.
    pub fn validate_deck(deck: &Deck) -> Result<(), DomainError> {
        let mut titles = HashSet::new();

        for card in deck.cards() {
            if card.title.trim().is_empty() {
                return Err(DomainError::InvalidCard {
                    title: "<untitled>".into(),
                    reason: "card title is empty".into(),
                });
            }
            if card.body.trim().is_empty() {
                return Err(DomainError::InvalidCard {
                    title: card.title.clone(),
                    reason: "card body is empty".into(),
                });
            }
            if !titles.insert(card.title.as_str()) {
                return Err(DomainError::InvalidDeck(format!(
                    "duplicate card title: {}",
                    card.title
                )));
            }
        }

        Ok(())
    }
}
