//! `showreel list`: enumerate available decks.

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let service = super::deck_service()?;

    let decks = match args.language {
        Some(lang) => service
            .find_by_language(lang.into())
            .map_err(CliError::Core)?,
        None => service.list().map_err(CliError::Core)?,
    };

    match args.format {
        ListFormat::Table => {
            output.header("Available Decks:")?;
            for deck in &decks {
                output.print(&format!(
                    "  {:<16} {:>2} cards  [{}]  {}",
                    deck.id,
                    deck.cards,
                    deck.languages.join(", "),
                    deck.description
                ))?;
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&decks).map_err(|e| CliError::InvalidInput {
                message: format!("failed to serialise deck list: {e}"),
                source: Some(Box::new(e)),
            })?;
            println!("{json}");
        }

        ListFormat::List => {
            for deck in &decks {
                println!("{}", deck.id);
            }
        }

        ListFormat::Csv => {
            println!("id,name,cards,languages");
            for deck in &decks {
                println!(
                    "{},{},{},{}",
                    deck.id,
                    deck.name,
                    deck.cards,
                    deck.languages.join(";")
                );
            }
        }
    }

    Ok(())
}
