//! Command handlers.
//!
//! Each submodule implements one subcommand's `execute` function.  Handlers
//! wire adapters to core services and translate results into output and
//! [`crate::error::CliError`]s; no carousel logic lives here.

pub mod completions;
pub mod config;
pub mod list;
pub mod play;
pub mod show;

use showreel_adapters::InMemoryStore;
use showreel_core::{
    application::DeckService,
    domain::{Deck, DeckId},
};

use crate::error::{CliError, CliResult};

/// Build the deck service over the discovered deck collection.
pub(crate) fn deck_service() -> CliResult<DeckService> {
    let store = InMemoryStore::with_builtin().map_err(CliError::Core)?;
    Ok(DeckService::new(Box::new(store)))
}

/// Resolve a deck ID, mapping the miss onto the CLI's not-found error.
pub(crate) fn resolve_deck(service: &DeckService, id: &str) -> CliResult<Deck> {
    service
        .get(&DeckId::new(id))
        .map_err(|_| CliError::DeckNotFound { id: id.to_string() })
}
