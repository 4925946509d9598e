//! `showreel show`: print one card and exit.
//!
//! The scriptable counterpart to `play`: no timer, no key input, plain
//! stdout.  Useful in pipes and for shell prompts.

use showreel_core::domain::Carousel;

use crate::{
    cli::{GlobalArgs, ShowArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ShowArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let service = super::deck_service()?;
    let deck = super::resolve_deck(&service, &args.deck)?;
    let deck_len = deck.len();

    // Route the 1-based card number through the carousel's own range check
    // so `show` and `play` agree on what a valid position is.
    let mut carousel = Carousel::new(deck);
    let index = args
        .card
        .checked_sub(1)
        .ok_or(CliError::CardOutOfRange {
            deck: args.deck.clone(),
            card: 0,
            len: deck_len,
        })?;
    carousel.jump_to(index).map_err(|_| CliError::CardOutOfRange {
        deck: args.deck.clone(),
        card: args.card,
        len: deck_len,
    })?;

    let card = carousel.active_card();

    if args.body_only {
        println!("{}", card.body);
        return Ok(());
    }

    output.header(&format!("{} [{}]", card.title, card.language))?;
    if let Some(category) = card.category {
        output.info(&format!("category: {category}"))?;
    }
    output.print(&card.description)?;
    output.print("")?;
    // The snippet goes to stdout directly so it survives --quiet and pipes.
    println!("{}", card.body);

    Ok(())
}
