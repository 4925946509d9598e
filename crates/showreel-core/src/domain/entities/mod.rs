//! Domain entities.

pub mod card;
pub mod carousel;
pub mod deck;

pub use card::Card;
pub use carousel::{Carousel, SwipeConfig};
pub use deck::{Deck, DeckId};
