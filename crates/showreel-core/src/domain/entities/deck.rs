//! Deck entity: a fixed, ordered, non-empty sequence of cards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::card::Card;
use crate::domain::error::DomainError;

// ── DeckId ───────────────────────────────────────────────────────────────────

/// Identifier for a deck, e.g. `fullstack` or `infrastructure`.
///
/// Kebab-case by convention; comparison is exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckId(String);

impl DeckId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeckId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ── Deck ─────────────────────────────────────────────────────────────────────

/// An ordered collection of cards shown by one carousel.
///
/// Cards are fixed at construction (never added or removed at runtime),
/// so every index in `[0, len)` stays valid for the deck's lifetime.
/// Construction rejects an empty card list: modular index arithmetic is
/// undefined over zero cards, and a carousel must never be built on top of
/// one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub id: DeckId,
    /// Human-readable deck name.
    pub name: String,
    /// One-line summary of what the deck showcases.
    pub description: String,
    cards: Vec<Card>,
}

impl Deck {
    /// Create a deck.  Fails with [`DomainError::EmptyDeck`] if `cards` is
    /// empty.
    pub fn new(
        id: DeckId,
        name: impl Into<String>,
        description: impl Into<String>,
        cards: Vec<Card>,
    ) -> Result<Self, DomainError> {
        if cards.is_empty() {
            return Err(DomainError::EmptyDeck {
                deck_id: id.to_string(),
            });
        }
        Ok(Self {
            id,
            name: name.into(),
            description: description.into(),
            cards,
        })
    }

    /// Number of cards.  Always at least 1.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always `false`; kept for API symmetry with collection types.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `index`, or `None` when out of range.
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// All cards in display order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Distinct languages across the deck, in first-appearance order.
    pub fn languages(&self) -> Vec<crate::domain::Language> {
        let mut seen = Vec::new();
        for card in &self.cards {
            if !seen.contains(&card.language) {
                seen.push(card.language);
            }
        }
        seen
    }
}
