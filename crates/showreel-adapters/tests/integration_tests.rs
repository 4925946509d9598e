//! Integration tests wiring the core services to real adapters.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use showreel_adapters::{InMemoryStore, ManualScheduler, ThreadScheduler};
use showreel_core::{
    application::ports::DeckStore,
    domain::{Card, Deck, DeckId, Direction, Language},
    prelude::{CarouselConfig, CarouselService},
};

fn deck_of(n: usize) -> Deck {
    let cards = (0..n)
        .map(|i| {
            Card::new(
                format!("card {i}"),
                Language::Sql,
                format!("SELECT {i};"),
                "test",
            )
        })
        .collect();
    Deck::new(DeckId::new("test"), "Test", "test deck", cards).unwrap()
}

// ── CarouselService + ManualScheduler ─────────────────────────────────────────

#[test]
fn manual_ticks_advance_the_service() {
    let scheduler = ManualScheduler::new();
    let service = CarouselService::new(
        deck_of(4),
        Box::new(scheduler.clone()),
        CarouselConfig::default(),
    )
    .unwrap();

    assert_eq!(service.active_index().unwrap(), 0);
    scheduler.fire();
    scheduler.fire();
    scheduler.fire();
    assert_eq!(service.active_index().unwrap(), 3);
    scheduler.fire();
    assert_eq!(service.active_index().unwrap(), 0, "tick wraps like advance");
}

#[test]
fn manual_interaction_does_not_reset_tick_cadence() {
    let scheduler = ManualScheduler::new();
    let service = CarouselService::new(
        deck_of(5),
        Box::new(scheduler.clone()),
        CarouselConfig::default(),
    )
    .unwrap();

    scheduler.fire(); // 1
    service.advance(Direction::Backward).unwrap(); // back to 0
    scheduler.fire(); // timer still live, 1 again
    assert_eq!(service.active_index().unwrap(), 1);
}

#[test]
fn stop_cancels_the_manual_registration() {
    let scheduler = ManualScheduler::new();
    let mut service = CarouselService::new(
        deck_of(3),
        Box::new(scheduler.clone()),
        CarouselConfig::default(),
    )
    .unwrap();

    assert_eq!(scheduler.live(), 1);
    service.stop();
    assert_eq!(scheduler.live(), 0);

    scheduler.fire();
    assert_eq!(service.active_index().unwrap(), 0, "no tick after stop");
}

#[test]
fn observer_sees_every_transition() {
    let scheduler = ManualScheduler::new();
    let service = CarouselService::new(
        deck_of(3),
        Box::new(scheduler.clone()),
        CarouselConfig::default(),
    )
    .unwrap();

    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    service.set_observer(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    scheduler.fire();
    service.advance(Direction::Forward).unwrap();
    service.jump_to(0).unwrap();
    assert_eq!(seen.load(Ordering::SeqCst), 3);
}

// ── CarouselService + ThreadScheduler ─────────────────────────────────────────

#[test]
fn real_timer_advances_then_stop_is_authoritative() {
    let config = CarouselConfig {
        interval: Duration::from_millis(15),
        ..CarouselConfig::default()
    };
    let mut service =
        CarouselService::new(deck_of(4), Box::new(ThreadScheduler::new()), config).unwrap();

    std::thread::sleep(Duration::from_millis(80));
    assert!(
        service.active_index().unwrap() != 0 || service.pending_direction().unwrap().is_some(),
        "timer should have advanced at least once"
    );

    service.stop();
    let frozen = service.active_index().unwrap();

    // No scheduled advance may land after stop() has returned.
    std::thread::sleep(Duration::from_millis(60));
    assert_eq!(service.active_index().unwrap(), frozen);
}

#[test]
fn drag_gesture_works_alongside_a_live_timer() {
    let config = CarouselConfig {
        // Long interval so the timer never fires during this test.
        interval: Duration::from_secs(60),
        ..CarouselConfig::default()
    };
    let service =
        CarouselService::new(deck_of(4), Box::new(ThreadScheduler::new()), config).unwrap();

    // Leftward flick: power = 2000 * -10 = -20000, commits forward.
    let applied = service.drag_end(-2000.0, -10.0).unwrap();
    assert_eq!(applied, Some(Direction::Forward));
    assert_eq!(service.active_index().unwrap(), 1);

    // Weak drag stays put.
    assert_eq!(service.drag_end(100.0, 5.0).unwrap(), None);
    assert_eq!(service.active_index().unwrap(), 1);
}

// ── Store + built-in decks ────────────────────────────────────────────────────

#[test]
fn builtin_decks_have_documented_shapes() {
    let store = InMemoryStore::with_builtin().unwrap();

    let fullstack = store.get(&DeckId::new("fullstack")).unwrap();
    assert_eq!(fullstack.len(), 8);

    let infra = store.get(&DeckId::new("infrastructure")).unwrap();
    assert_eq!(infra.len(), 5);

    let integration = store.get(&DeckId::new("integration")).unwrap();
    assert_eq!(integration.len(), 4);
}

#[test]
fn builtin_deck_drives_a_full_carousel_cycle() {
    let store = InMemoryStore::with_builtin().unwrap();
    let deck = store.get(&DeckId::new("integration")).unwrap();
    let n = deck.len();

    let scheduler = ManualScheduler::new();
    let service =
        CarouselService::new(deck, Box::new(scheduler.clone()), CarouselConfig::default())
            .unwrap();

    for _ in 0..n {
        scheduler.fire();
    }
    assert_eq!(service.active_index().unwrap(), 0, "full cycle returns home");
}
