//! Carousel entity: the index state machine behind a rotating card display.
//!
//! The carousel tracks which card of a [`Deck`] is active and how it got
//! there.  It knows nothing about timers, terminals, or gestures as input
//! devices; those live behind the application layer's ports.  Every
//! operation here is a synchronous, atomic step: callers serialise access
//! (see [`crate::application::CarouselService`]), so no two transitions
//! ever interleave mid-mutation.
//!
//! # State
//!
//! - `active_index`: always in `[0, len)`; the deck guarantees `len >= 1`.
//! - `pending`: direction of the most recent transition.  Read by the
//!   rendering layer to choose which side the next card enters from; it has
//!   no effect on index arithmetic.
//!
//! # Transitions
//!
//! | Trigger          | Effect                                  |
//! |------------------|-----------------------------------------|
//! | `advance(dir)`   | modular step, wraps both ways           |
//! | `jump_to(i)`     | direct jump, rejects out-of-range       |
//! | timer tick       | `advance(Forward)` (scheduled upstream) |
//! | `drag_end(o, v)` | zero or one `advance`, by swipe power   |

use serde::{Deserialize, Serialize};

use crate::domain::entities::card::Card;
use crate::domain::entities::deck::Deck;
use crate::domain::error::DomainError;
use crate::domain::value_objects::Direction;

// ── SwipeConfig ──────────────────────────────────────────────────────────────

/// Drag-gesture sensitivity.
///
/// A drag commits to a page turn only when its *swipe power* (how far the
/// gesture travelled times how fast it was moving) clears the threshold.
/// `10_000.0` is the empirically chosen cutoff carried over from the
/// original widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeConfig {
    pub threshold: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self { threshold: 10_000.0 }
    }
}

impl SwipeConfig {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// `|offset| * velocity`.
    ///
    /// The offset's magnitude and the velocity's sign both matter: a long
    /// slow drag and a short fast flick can carry the same power, and the
    /// velocity sign decides which way the gesture points.  A leftward
    /// flick (negative offset *and* negative velocity) yields a negative
    /// power and pages forward.
    pub fn power(offset: f32, velocity: f32) -> f32 {
        offset.abs() * velocity
    }
}

// ── Carousel ─────────────────────────────────────────────────────────────────

/// The carousel state machine.
///
/// Owns its deck exclusively.  There is no terminal state; the machine runs
/// until its owner drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    deck: Deck,
    active_index: usize,
    pending: Option<Direction>,
    swipe: SwipeConfig,
}

impl Carousel {
    /// Create a carousel positioned at the first card.
    ///
    /// `Deck` construction already rejects zero cards, so a carousel can
    /// never exist over an empty sequence.
    pub fn new(deck: Deck) -> Self {
        Self::with_swipe(deck, SwipeConfig::default())
    }

    /// Create a carousel with a custom drag sensitivity.
    pub fn with_swipe(deck: Deck, swipe: SwipeConfig) -> Self {
        Self {
            deck,
            active_index: 0,
            pending: None,
            swipe,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Direction of the most recent transition, or `None` before the first.
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn active_card(&self) -> &Card {
        // active_index is an invariant of every transition below.
        &self.deck.cards()[self.active_index]
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Step one card forward or backward, wrapping at either end.
    ///
    /// Advancing past the last card returns to the first; retreating past
    /// the first wraps to the last.
    pub fn advance(&mut self, direction: Direction) {
        let n = self.deck.len();
        self.active_index = match direction {
            Direction::Forward => (self.active_index + 1) % n,
            Direction::Backward => (self.active_index + n - 1) % n,
        };
        self.pending = Some(direction);
    }

    /// Jump straight to `index`.
    ///
    /// Out-of-range indices are rejected, never clamped: the fixed-size
    /// indicator row only ever emits valid indices, so anything else is an
    /// integration bug worth failing loudly on.  The recorded direction is
    /// `Forward` when the target is after the active card, `Backward`
    /// otherwise (a jump to the already-active card counts as backward,
    /// matching the original indicator handler).
    pub fn jump_to(&mut self, index: usize) -> Result<(), DomainError> {
        let n = self.deck.len();
        if index >= n {
            return Err(DomainError::IndexOutOfRange { index, len: n });
        }
        self.pending = Some(if index > self.active_index {
            Direction::Forward
        } else {
            Direction::Backward
        });
        self.active_index = index;
        Ok(())
    }

    /// Resolve the end of a drag gesture.
    ///
    /// Power below `-threshold` pages forward, above `+threshold` pages
    /// backward, anything between is a non-committal drag and the card
    /// snaps back unchanged.  Returns the direction applied, if any.
    pub fn drag_end(&mut self, offset: f32, velocity: f32) -> Option<Direction> {
        let power = SwipeConfig::power(offset, velocity);

        if power < -self.swipe.threshold {
            self.advance(Direction::Forward);
            Some(Direction::Forward)
        } else if power > self.swipe.threshold {
            self.advance(Direction::Backward);
            Some(Direction::Backward)
        } else {
            None
        }
    }
}
