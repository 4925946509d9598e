//! Deck Service - deck management operations.
//!
//! Handles deck CRUD operations and metadata queries.
//! Separated from CarouselService for single responsibility.

use serde::Serialize;

use crate::{
    application::ports::DeckStore,
    domain::{Deck, DeckId, Language},
    error::ShowreelResult,
};

/// Information about a deck for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cards: usize,
    pub languages: Vec<String>,
}

impl From<&Deck> for DeckInfo {
    fn from(deck: &Deck) -> Self {
        Self {
            id: deck.id.to_string(),
            name: deck.name.clone(),
            description: deck.description.clone(),
            cards: deck.len(),
            languages: deck.languages().iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// Service for deck operations.
pub struct DeckService {
    store: Box<dyn DeckStore>,
}

impl DeckService {
    /// Create a new deck service.
    pub fn new(store: Box<dyn DeckStore>) -> Self {
        Self { store }
    }

    /// Get a deck by ID.
    pub fn get(&self, id: &DeckId) -> ShowreelResult<Deck> {
        self.store.get(id)
    }

    /// Add or update a deck.
    pub fn save(&self, deck: Deck) -> ShowreelResult<()> {
        self.store.insert(deck)
    }

    /// Remove a deck.
    pub fn remove(&self, id: &DeckId) -> ShowreelResult<()> {
        self.store.remove(id)
    }

    /// Find decks containing cards in `language`.
    pub fn find_by_language(&self, language: Language) -> ShowreelResult<Vec<DeckInfo>> {
        Ok(self
            .store
            .find_by_language(language)?
            .iter()
            .map(DeckInfo::from)
            .collect())
    }

    /// List all decks.
    pub fn list(&self) -> ShowreelResult<Vec<DeckInfo>> {
        let mut infos: Vec<DeckInfo> = self.store.list()?.iter().map(DeckInfo::from).collect();
        infos.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(infos)
    }
}
