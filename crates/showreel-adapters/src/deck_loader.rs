//! Filesystem-based deck loader.
//!
//! Discovers and parses `*.toml` deck manifests from a directory tree,
//! converting them into domain [`Deck`] objects ready for the carousel.
//!
//! # Directory layout expected
//!
//! ```text
//! decks/
//! ├── fullstack.toml
//! ├── infrastructure.toml
//! └── extra/
//!     └── experiments.toml     ← nested files are found too
//! ```
//!
//! # Deck file format
//!
//! ```toml
//! id          = "fullstack"
//! name        = "Full-Stack Engineering"
//! description = "API, frontend, and background-job snippets"
//!
//! [[cards]]
//! title       = "Ruby on Rails API Endpoint"
//! language    = "ruby"          # ruby | typescript | javascript | html |
//!                               # css | sql | yaml | bash
//! description = "RESTful API endpoint"
//! category    = "database"      # optional; database | cloud | server |
//!                               # payment | communication | ai
//! body        = '''
//! class ProductsController < ApplicationController
//! end
//! '''
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use showreel_core::domain::{Card, Deck, DeckId, DomainError, DomainValidator};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of one deck file.
#[derive(Debug, Deserialize, Clone)]
pub struct DeckManifest {
    /// Unique slug, e.g. `"fullstack"`.
    pub id: String,
    /// Display name shown in `showreel list`.
    pub name: String,
    pub description: Option<String>,
    pub cards: Vec<CardEntry>,
}

/// One entry under `[[cards]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct CardEntry {
    pub title: String,
    /// Language slug; parsed case-insensitively, aliases like `"ts"` and
    /// `"js"` are accepted.
    pub language: String,
    pub description: String,
    /// Optional category badge slug.
    pub category: Option<String>,
    /// The snippet text itself.  Display content only.
    pub body: String,
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads [`Deck`] objects from a directory tree of `*.toml` manifests.
///
/// Files that fail to parse or validate emit a `WARN` log and are skipped;
/// they do not prevent other decks from loading.
///
/// # Example
///
/// ```no_run
/// use showreel_adapters::deck_loader::FilesystemDeckLoader;
///
/// let loader = FilesystemDeckLoader::new("./decks");
/// let decks = loader.load_all()?;
/// println!("Loaded {} decks", decks.len());
/// # Ok::<(), showreel_core::domain::DomainError>(())
/// ```
pub struct FilesystemDeckLoader {
    decks_dir: PathBuf,
}

impl FilesystemDeckLoader {
    /// Create a loader pointed at `decks_dir`.
    ///
    /// The directory does not need to exist yet; [`load_all`] will return an
    /// error if it is missing when called.
    pub fn new(decks_dir: impl Into<PathBuf>) -> Self {
        Self {
            decks_dir: decks_dir.into(),
        }
    }

    /// Load every valid deck found under [`decks_dir`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDeck`] if:
    /// - `decks_dir` does not exist.
    /// - `decks_dir` cannot be walked (permissions, I/O failure).
    ///
    /// Individual files that are malformed or fail validation are **skipped
    /// with a `WARN` log** rather than failing the whole batch.
    #[instrument(skip(self), fields(dir = %self.decks_dir.display()))]
    pub fn load_all(&self) -> Result<Vec<Deck>, DomainError> {
        if !self.decks_dir.exists() {
            return Err(DomainError::InvalidDeck(format!(
                "decks directory not found: {}",
                self.decks_dir.display()
            )));
        }

        let mut decks = Vec::new();

        for walk_entry in WalkDir::new(&self.decks_dir).min_depth(1) {
            let walk_entry = walk_entry
                .map_err(|e| DomainError::InvalidDeck(format!("directory walk error: {e}")))?;

            let path = walk_entry.path();
            if !walk_entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some("toml")
            {
                continue;
            }

            match load_deck_from_file(path) {
                Ok(deck) => {
                    debug!(id = %deck.id, cards = deck.len(), "loaded deck");
                    decks.push(deck);
                }
                Err(e) => {
                    // One bad deck must not block all others.
                    warn!(
                        file  = %path.display(),
                        error = %e,
                        "skipping deck file due to load error"
                    );
                }
            }
        }

        debug!(count = decks.len(), "finished loading decks");
        Ok(decks)
    }
}

/// Load and validate a single deck from one TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the TOML is malformed, any
/// card carries an unknown language or category, or the resulting deck fails
/// domain validation.
#[instrument(fields(file = %path.display()))]
pub fn load_deck_from_file(path: &Path) -> Result<Deck, DomainError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        DomainError::InvalidDeck(format!("failed to read '{}': {e}", path.display()))
    })?;

    let manifest: DeckManifest = toml::from_str(&raw).map_err(|e| {
        DomainError::InvalidDeck(format!("failed to parse '{}': {e}", path.display()))
    })?;

    deck_from_manifest(manifest)
}

/// Convert a parsed manifest into a validated [`Deck`].
fn deck_from_manifest(manifest: DeckManifest) -> Result<Deck, DomainError> {
    let mut cards = Vec::with_capacity(manifest.cards.len());

    for entry in manifest.cards {
        let language = entry.language.parse()?;
        let mut card = Card::new(entry.title, language, entry.body, entry.description);
        if let Some(cat) = entry.category {
            card = card.with_category(cat.parse()?);
        }
        cards.push(card);
    }

    let deck = Deck::new(
        DeckId::new(manifest.id),
        manifest.name,
        manifest.description.unwrap_or_default(),
        cards,
    )?;

    DomainValidator::validate_deck(&deck)?;
    Ok(deck)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use showreel_core::domain::{Category, Language};
    use tempfile::TempDir;

    /// Minimal valid deck shared across many tests.
    const MINIMAL_DECK: &str = r#"
id   = "mini"
name = "Mini Deck"

[[cards]]
title       = "One"
language    = "sql"
description = "single card"
body        = "SELECT 1;"
"#;

    fn write_deck(dir: &Path, file: &str, content: &str) {
        fs::write(dir.join(file), content).unwrap();
    }

    #[test]
    fn load_all_returns_error_for_missing_dir() {
        let loader = FilesystemDeckLoader::new("/absolutely/does/not/exist");
        assert!(matches!(loader.load_all(), Err(DomainError::InvalidDeck(_))));
    }

    #[test]
    fn loads_minimal_deck() {
        let temp = TempDir::new().unwrap();
        write_deck(temp.path(), "mini.toml", MINIMAL_DECK);

        let decks = FilesystemDeckLoader::new(temp.path()).load_all().unwrap();
        assert_eq!(decks.len(), 1);
        assert_eq!(decks[0].id, DeckId::new("mini"));
        assert_eq!(decks[0].name, "Mini Deck");
        assert_eq!(decks[0].len(), 1);
        assert_eq!(decks[0].cards()[0].language, Language::Sql);
    }

    #[test]
    fn loads_category_and_language_aliases() {
        let temp = TempDir::new().unwrap();
        write_deck(
            temp.path(),
            "aliased.toml",
            r#"
id   = "aliased"
name = "Aliased"

[[cards]]
title       = "TS card"
language    = "ts"
description = "alias check"
category    = "cloud"
body        = "const x = 1;"
"#,
        );

        let decks = FilesystemDeckLoader::new(temp.path()).load_all().unwrap();
        let card = &decks[0].cards()[0];
        assert_eq!(card.language, Language::TypeScript);
        assert_eq!(card.category, Some(Category::Cloud));
    }

    #[test]
    fn load_all_continues_when_one_file_is_invalid() {
        let temp = TempDir::new().unwrap();
        write_deck(temp.path(), "bad.toml", "this is = not a deck [[[");
        write_deck(temp.path(), "good.toml", MINIMAL_DECK);

        let decks = FilesystemDeckLoader::new(temp.path()).load_all().unwrap();
        assert_eq!(decks.len(), 1, "bad file should be skipped");
        assert_eq!(decks[0].id, DeckId::new("mini"));
    }

    #[test]
    fn empty_card_list_is_skipped() {
        let temp = TempDir::new().unwrap();
        write_deck(
            temp.path(),
            "empty.toml",
            r#"
id    = "empty"
name  = "Empty"
cards = []
"#,
        );

        let decks = FilesystemDeckLoader::new(temp.path()).load_all().unwrap();
        assert!(decks.is_empty(), "a zero-card deck must never load");
    }

    #[test]
    fn unknown_language_fails_that_file_only() {
        let temp = TempDir::new().unwrap();
        write_deck(
            temp.path(),
            "weird.toml",
            r#"
id   = "weird"
name = "Weird"

[[cards]]
title       = "Mystery"
language    = "cobol"
description = "unsupported"
body        = "MOVE A TO B."
"#,
        );
        write_deck(temp.path(), "good.toml", MINIMAL_DECK);

        let decks = FilesystemDeckLoader::new(temp.path()).load_all().unwrap();
        assert_eq!(decks.len(), 1);
    }

    #[test]
    fn nested_files_are_discovered() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("extra");
        fs::create_dir(&nested).unwrap();
        write_deck(&nested, "nested.toml", MINIMAL_DECK);

        let decks = FilesystemDeckLoader::new(temp.path()).load_all().unwrap();
        assert_eq!(decks.len(), 1);
    }

    #[test]
    fn non_toml_files_are_ignored() {
        let temp = TempDir::new().unwrap();
        write_deck(temp.path(), "README.md", "# not a deck");
        write_deck(temp.path(), "good.toml", MINIMAL_DECK);

        let decks = FilesystemDeckLoader::new(temp.path()).load_all().unwrap();
        assert_eq!(decks.len(), 1);
    }

    #[test]
    fn load_deck_from_file_reports_parse_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        fs::write(&path, "not toml at all ===").unwrap();

        let err = load_deck_from_file(&path).unwrap_err();
        assert!(matches!(err, DomainError::InvalidDeck(_)));
    }
}
