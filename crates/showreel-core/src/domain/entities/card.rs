//! Card entity: one displayable unit in a deck.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Category, Language};

/// A single snippet card.
///
/// The carousel never inspects card content: a card's only identity, as
/// far as navigation is concerned, is its position in the deck's ordered
/// sequence.  Everything here is presentation payload for the rendering
/// layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Display title, e.g. "Ruby on Rails API Endpoint".
    pub title: String,
    /// Language label for syntax display.
    pub language: Language,
    /// The snippet text itself.
    pub body: String,
    /// One-line summary shown under the title.
    pub description: String,
    /// Optional topical badge.  Not every deck uses categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Card {
    /// Create a card without a category badge.
    pub fn new(
        title: impl Into<String>,
        language: Language,
        body: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            language,
            body: body.into(),
            description: description.into(),
            category: None,
        }
    }

    /// Attach a category badge.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}
