//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "run a carousel" or "list decks".

pub mod carousel_service;
pub mod deck_service;

pub use carousel_service::{CarouselConfig, CarouselService, CarouselView, DEFAULT_INTERVAL};
pub use deck_service::{DeckInfo, DeckService};
