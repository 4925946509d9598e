// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Showreel.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! Timers, terminals, and deck storage are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or clock calls
//! - **No external crates**: Only std library + thiserror + serde
//! - **Immutable entities**: Cards and decks never change after construction
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    card::Card,
    carousel::{Carousel, SwipeConfig},
    deck::{Deck, DeckId},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Category, Direction, Language};

// Validation is used by stores before insertion
pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn deck_of(n: usize) -> Deck {
        let cards = (0..n)
            .map(|i| {
                Card::new(
                    format!("Card {i}"),
                    Language::Ruby,
                    format!("puts {i}"),
                    format!("card number {i}"),
                )
            })
            .collect();
        Deck::new(DeckId::new("test"), "Test Deck", "for tests", cards).unwrap()
    }

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn language_parses_correctly() {
        assert_eq!(Language::from_str("ruby").unwrap(), Language::Ruby);
        assert_eq!(Language::from_str("TS").unwrap(), Language::TypeScript);
        assert_eq!(Language::from_str("markup").unwrap(), Language::Html);
        assert!(Language::from_str("cobol").is_err());
    }

    #[test]
    fn category_parses_correctly() {
        assert_eq!(Category::from_str("database").unwrap(), Category::Database);
        assert_eq!(Category::from_str("AI").unwrap(), Category::Ai);
        assert!(Category::from_str("misc").is_err());
    }

    #[test]
    fn direction_display_and_reverse() {
        assert_eq!(Direction::Forward.to_string(), "forward");
        assert_eq!(Direction::Backward.reverse(), Direction::Forward);
    }

    // ========================================================================
    // Deck Tests
    // ========================================================================

    #[test]
    fn empty_deck_rejected() {
        let result = Deck::new(DeckId::new("empty"), "Empty", "no cards", vec![]);
        assert!(matches!(result, Err(DomainError::EmptyDeck { .. })));
    }

    #[test]
    fn deck_languages_deduplicated_in_order() {
        let cards = vec![
            Card::new("a", Language::Sql, "SELECT 1", "one"),
            Card::new("b", Language::Yaml, "key: v", "two"),
            Card::new("c", Language::Sql, "SELECT 2", "three"),
        ];
        let deck = Deck::new(DeckId::new("mix"), "Mix", "", cards).unwrap();
        assert_eq!(deck.languages(), vec![Language::Sql, Language::Yaml]);
    }

    #[test]
    fn validator_rejects_duplicate_titles() {
        let cards = vec![
            Card::new("same", Language::Ruby, "a", ""),
            Card::new("same", Language::Ruby, "b", ""),
        ];
        let deck = Deck::new(DeckId::new("dup"), "Dup", "", cards).unwrap();
        assert!(matches!(
            DomainValidator::validate_deck(&deck),
            Err(DomainError::InvalidDeck(_))
        ));
    }

    #[test]
    fn validator_rejects_blank_body() {
        let cards = vec![Card::new("t", Language::Ruby, "   ", "")];
        let deck = Deck::new(DeckId::new("blank"), "Blank", "", cards).unwrap();
        assert!(matches!(
            DomainValidator::validate_deck(&deck),
            Err(DomainError::InvalidCard { .. })
        ));
    }

    // ========================================================================
    // Carousel Transition Tests
    // ========================================================================

    #[test]
    fn starts_at_first_card_with_no_pending_direction() {
        let carousel = Carousel::new(deck_of(3));
        assert_eq!(carousel.active_index(), 0);
        assert_eq!(carousel.pending_direction(), None);
    }

    #[test]
    fn forward_wraparound() {
        let mut carousel = Carousel::new(deck_of(5));
        carousel.jump_to(4).unwrap();
        carousel.advance(Direction::Forward);
        assert_eq!(carousel.active_index(), 0);
        assert_eq!(carousel.pending_direction(), Some(Direction::Forward));
    }

    #[test]
    fn backward_wraparound() {
        let mut carousel = Carousel::new(deck_of(5));
        carousel.advance(Direction::Backward);
        assert_eq!(carousel.active_index(), 4);
        assert_eq!(carousel.pending_direction(), Some(Direction::Backward));
    }

    #[test]
    fn repeated_forward_advance_cycles() {
        let mut carousel = Carousel::new(deck_of(3));
        for k in 1..=7 {
            carousel.advance(Direction::Forward);
            assert_eq!(carousel.active_index(), k % 3);
        }
    }

    #[test]
    fn single_card_deck_always_at_zero() {
        let mut carousel = Carousel::new(deck_of(1));
        carousel.advance(Direction::Forward);
        assert_eq!(carousel.active_index(), 0);
        carousel.advance(Direction::Backward);
        assert_eq!(carousel.active_index(), 0);
    }

    // ========================================================================
    // Jump Tests
    // ========================================================================

    #[test]
    fn jump_forward_records_forward_direction() {
        let mut carousel = Carousel::new(deck_of(5));
        carousel.jump_to(3).unwrap();
        assert_eq!(carousel.active_index(), 3);
        assert_eq!(carousel.pending_direction(), Some(Direction::Forward));
    }

    #[test]
    fn jump_backward_records_backward_direction() {
        let mut carousel = Carousel::new(deck_of(5));
        carousel.jump_to(4).unwrap();
        carousel.jump_to(1).unwrap();
        assert_eq!(carousel.pending_direction(), Some(Direction::Backward));
    }

    #[test]
    fn jump_to_active_index_counts_as_backward() {
        // Matches the original indicator handler: `index > current` is the
        // only forward case.
        let mut carousel = Carousel::new(deck_of(5));
        carousel.jump_to(2).unwrap();
        carousel.jump_to(2).unwrap();
        assert_eq!(carousel.pending_direction(), Some(Direction::Backward));
    }

    #[test]
    fn out_of_range_jump_rejected_and_state_unchanged() {
        let mut carousel = Carousel::new(deck_of(5));
        carousel.jump_to(2).unwrap();

        let err = carousel.jump_to(5).unwrap_err();
        assert_eq!(err, DomainError::IndexOutOfRange { index: 5, len: 5 });
        assert_eq!(carousel.active_index(), 2);

        assert!(carousel.jump_to(usize::MAX).is_err());
        assert_eq!(carousel.active_index(), 2);
    }

    // ========================================================================
    // Drag Tests
    // ========================================================================

    #[test]
    fn drag_below_cutoff_leaves_state_unchanged() {
        // |100| * 50 = 5000 < 10000: non-committal, card snaps back.
        let mut carousel = Carousel::new(deck_of(5));
        assert_eq!(carousel.drag_end(100.0, 50.0), None);
        assert_eq!(carousel.active_index(), 0);
        assert_eq!(carousel.pending_direction(), None);
    }

    #[test]
    fn leftward_flick_pages_forward() {
        // |−2000| * −10 = −20000 < −10000.
        let mut carousel = Carousel::new(deck_of(5));
        assert_eq!(carousel.drag_end(-2000.0, -10.0), Some(Direction::Forward));
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn rightward_flick_pages_backward() {
        // |2000| * 10 = 20000 > 10000.
        let mut carousel = Carousel::new(deck_of(5));
        assert_eq!(carousel.drag_end(2000.0, 10.0), Some(Direction::Backward));
        assert_eq!(carousel.active_index(), 4);
    }

    #[test]
    fn velocity_sign_decides_direction_not_offset_sign() {
        // A negative offset with a positive velocity gives positive power:
        // the gesture was released moving rightward, so it pages backward.
        let mut carousel = Carousel::new(deck_of(5));
        assert_eq!(carousel.drag_end(-2000.0, 10.0), Some(Direction::Backward));
    }

    #[test]
    fn custom_threshold_respected() {
        let deck = deck_of(5);
        let mut carousel = Carousel::with_swipe(deck, SwipeConfig::new(100.0));
        assert_eq!(carousel.drag_end(-20.0, -10.0), Some(Direction::Forward));
    }

    #[test]
    fn drag_exactly_at_threshold_is_non_committal() {
        // Strict comparison, as in the original: power must exceed the
        // cutoff, not merely reach it.
        let mut carousel = Carousel::new(deck_of(5));
        assert_eq!(carousel.drag_end(1000.0, 10.0), None);
        assert_eq!(carousel.drag_end(-1000.0, -10.0), None);
        assert_eq!(carousel.active_index(), 0);
    }
}
