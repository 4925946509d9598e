//! In-memory deck store with built-in decks.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use showreel_core::{
    application::{ApplicationError, ports::DeckStore},
    domain::{Deck, DeckId, DomainValidator as validator, Language},
    error::{ShowreelError, ShowreelResult},
};

use crate::builtin_decks;

/// Thread-safe in-memory deck store.
#[derive(Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<HashMap<DeckId, Deck>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store with built-in decks loaded.
    pub fn with_builtin() -> ShowreelResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Load built-in decks.
    pub fn load_builtin(&self) -> ShowreelResult<()> {
        let decks = builtin_decks::all_decks()?;

        for deck in decks {
            self.insert(deck)?;
        }

        Ok(())
    }

    /// Get the number of decks.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all decks.
    pub fn clear(&self) -> ShowreelResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.clear();
        Ok(())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckStore for InMemoryStore {
    fn get(&self, id: &DeckId) -> ShowreelResult<Deck> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(id).cloned().ok_or_else(|| {
            ApplicationError::DeckResolution {
                reason: format!("Deck not found: {}", id),
            }
            .into()
        })
    }

    fn list(&self) -> ShowreelResult<Vec<Deck>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.values().cloned().collect())
    }

    fn find_by_language(&self, language: Language) -> ShowreelResult<Vec<Deck>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner
            .values()
            .filter(|d| d.languages().contains(&language))
            .cloned()
            .collect())
    }

    fn insert(&self, deck: Deck) -> ShowreelResult<()> {
        // Validate before insertion
        validator::validate_deck(&deck).map_err(ShowreelError::Domain)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.insert(deck.id.clone(), deck);
        Ok(())
    }

    fn remove(&self, id: &DeckId) -> ShowreelResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.remove(id).ok_or_else(|| {
            ShowreelError::from(ApplicationError::DeckResolution {
                reason: format!("Deck not found: {}", id),
            })
        })?;

        Ok(())
    }
}
