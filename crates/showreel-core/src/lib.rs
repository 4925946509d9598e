//! Showreel Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Showreel
//! carousel, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          showreel-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (CarouselService, DeckService)       │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: DeckStore, Scheduler)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    showreel-adapters (Infrastructure)   │
//! │  (InMemoryStore, ThreadScheduler, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │       (Carousel, Deck, Card)            │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use showreel_core::{
//!     application::CarouselService,
//!     domain::{Card, Deck, DeckId, Direction, Language},
//! };
//! # use showreel_core::{application::ports::{Scheduler, TickHandle}, error::ShowreelResult};
//! # struct NoopScheduler;
//! # struct NoopHandle;
//! # impl TickHandle for NoopHandle { fn cancel(&mut self) {} }
//! # impl Scheduler for NoopScheduler {
//! #     fn every(&self, _: std::time::Duration, _: Box<dyn FnMut() + Send>)
//! #         -> ShowreelResult<Box<dyn TickHandle>> { Ok(Box::new(NoopHandle)) }
//! # }
//!
//! // 1. Build a deck (must hold at least one card)
//! let deck = Deck::new(
//!     DeckId::new("demo"),
//!     "Demo",
//!     "A one-card deck",
//!     vec![Card::new("Hello", Language::Ruby, "puts 'hi'", "greeting")],
//! )
//! .unwrap();
//!
//! // 2. Drive it through the service (with an injected scheduler adapter)
//! let scheduler: Box<dyn Scheduler> = Box::new(NoopScheduler);
//! let service = CarouselService::new(deck, scheduler, Default::default()).unwrap();
//! service.advance(Direction::Forward).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CarouselConfig, CarouselService, CarouselView, DeckService,
        ports::{DeckStore, Scheduler, TickHandle},
    };
    pub use crate::domain::{
        Card, Carousel, Category, Deck, DeckId, Direction, Language, SwipeConfig,
    };
    pub use crate::error::{ShowreelError, ShowreelResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
