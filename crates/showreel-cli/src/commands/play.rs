//! `showreel play`: interactive carousel playback.
//!
//! Draws the active card to the terminal, auto-advancing on a timer, and
//! reads single key presses for manual navigation.  The timer keeps running
//! through manual input; it only stops on `--no-auto` or quit.

use std::sync::Arc;
use std::time::Duration;

use console::Key;
use tracing::{debug, info};

use showreel_adapters::ThreadScheduler;
use showreel_core::{
    application::{CarouselConfig, CarouselService, CarouselView},
    domain::{Direction, SwipeConfig},
};

use crate::{
    cli::{GlobalArgs, PlayArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: PlayArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    use std::io::IsTerminal;

    // Playback draws frames and reads keys; neither works through a pipe.
    if !std::io::stdout().is_terminal() {
        return Err(CliError::NotATerminal { command: "play" });
    }

    let deck_id = args.deck.unwrap_or_else(|| config.defaults.deck.clone());
    let service = super::deck_service()?;
    let deck = super::resolve_deck(&service, &deck_id)?;
    let deck_len = deck.len();

    let carousel_config = CarouselConfig {
        interval: Duration::from_millis(args.interval.unwrap_or(config.defaults.interval_ms)),
        swipe: SwipeConfig::new(config.defaults.swipe_threshold),
    };

    debug!(
        deck = %deck_id,
        interval_ms = carousel_config.interval.as_millis() as u64,
        no_auto = args.no_auto,
        "starting playback"
    );

    let mut carousel = CarouselService::new(
        deck,
        Box::new(ThreadScheduler::new()),
        carousel_config,
    )?;

    if args.no_auto {
        carousel.stop();
    }

    if let Some(n) = args.start_at {
        let index = n.checked_sub(1).ok_or(CliError::CardOutOfRange {
            deck: deck_id.clone(),
            card: 0,
            len: deck_len,
        })?;
        carousel.jump_to(index).map_err(|_| CliError::CardOutOfRange {
            deck: deck_id.clone(),
            card: n,
            len: deck_len,
        })?;
    }

    // Timer ticks fire on the scheduler thread; the shared OutputManager
    // redraws from there while the main thread blocks on read_key.
    let output = Arc::new(output);
    let frame_output = Arc::clone(&output);
    carousel.set_observer(move |view| {
        let _ = draw(&frame_output, view);
    });

    // Initial frame.
    draw(&output, &carousel.view()?)?;

    // ── Key loop ──────────────────────────────────────────────────────────
    loop {
        match output.term().read_key()? {
            Key::Char('q') | Key::Escape => break,
            Key::Char('n') | Key::ArrowRight => {
                let view = carousel.advance(Direction::Forward)?;
                draw(&output, &view)?;
            }
            Key::Char('p') | Key::ArrowLeft => {
                let view = carousel.advance(Direction::Backward)?;
                draw(&output, &view)?;
            }
            Key::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                // Out-of-range jumps are rejected by the carousel; in an
                // interactive session that just means "no such card", so the
                // frame stays put.
                match carousel.jump_to(index) {
                    Ok(view) => draw(&output, &view)?,
                    Err(e) => debug!(key = %c, error = %e, "jump rejected"),
                }
            }
            _ => {}
        }
    }

    carousel.stop();
    info!(deck = %deck_id, "playback finished");
    Ok(())
}

/// Redraw the whole frame for one carousel snapshot.
fn draw(output: &OutputManager, view: &CarouselView) -> std::io::Result<()> {
    output.clear()?;
    output.header(&format!(
        "{} (card {}/{})",
        view.deck_name,
        view.index + 1,
        view.len
    ))?;
    output.print("")?;
    output.print(&output.render_card(view))?;
    output.print("n/\u{2192} next \u{00b7} p/\u{2190} prev \u{00b7} 1-9 jump \u{00b7} q quit")
}
