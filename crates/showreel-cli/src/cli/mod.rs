//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "showreel",
    bin_name = "showreel",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f39e} Code-snippet carousel for your terminal",
    long_about = "Showreel cycles through decks of code snippets in the \
                  terminal, auto-advancing on a timer with manual navigation \
                  on top.",
    after_help = "EXAMPLES:\n\
        \x20 showreel play fullstack\n\
        \x20 showreel play infrastructure --interval 5000\n\
        \x20 showreel show integration --card 2\n\
        \x20 showreel list --lang ruby\n\
        \x20 showreel completions bash > /usr/share/bash-completion/completions/showreel",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a deck as an interactive carousel.
    #[command(
        visible_alias = "p",
        about = "Play a deck interactively",
        after_help = "EXAMPLES:\n\
            \x20 showreel play fullstack\n\
            \x20 showreel play infrastructure --interval 5000\n\
            \x20 showreel play integration --no-auto\n\n\
            KEYS:\n\
            \x20 n / \u{2192}   next card\n\
            \x20 p / \u{2190}   previous card\n\
            \x20 1-9       jump to card\n\
            \x20 q / Esc   quit"
    )]
    Play(PlayArgs),

    /// Print one card from a deck and exit.
    #[command(
        about = "Print a single card",
        after_help = "EXAMPLES:\n\
            \x20 showreel show fullstack            # first card\n\
            \x20 showreel show integration --card 3"
    )]
    Show(ShowArgs),

    /// List available decks.
    #[command(
        visible_alias = "ls",
        about = "List available decks",
        after_help = "EXAMPLES:\n\
            \x20 showreel list\n\
            \x20 showreel list --lang ruby\n\
            \x20 showreel list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 showreel completions bash > ~/.local/share/bash-completion/completions/showreel\n\
            \x20 showreel completions zsh  > ~/.zfunc/_showreel\n\
            \x20 showreel completions fish > ~/.config/fish/completions/showreel.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Showreel configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 showreel config get defaults.deck\n\
            \x20 showreel config set defaults.deck fullstack\n\
            \x20 showreel config list"
    )]
    Config(ConfigCommands),
}

// ── play ──────────────────────────────────────────────────────────────────────

/// Arguments for `showreel play`.
#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Deck to play.  Omit to use the configured default deck.
    #[arg(value_name = "DECK", help = "Deck ID (see 'showreel list')")]
    pub deck: Option<String>,

    /// Auto-advance interval in milliseconds.
    #[arg(
        short = 'i',
        long = "interval",
        value_name = "MS",
        help = "Auto-advance interval in milliseconds (default 8000)"
    )]
    pub interval: Option<u64>,

    /// Disable the auto-advance timer entirely.
    #[arg(long = "no-auto", help = "Disable auto-advance; navigate manually")]
    pub no_auto: bool,

    /// Start at a specific card (1-based).
    #[arg(
        long = "start-at",
        value_name = "N",
        help = "Card number to start on (1-based)"
    )]
    pub start_at: Option<usize>,
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `showreel show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Deck to read from.
    #[arg(value_name = "DECK", help = "Deck ID (see 'showreel list')")]
    pub deck: String,

    /// Card number to print (1-based).
    #[arg(
        short = 'n',
        long = "card",
        value_name = "N",
        default_value = "1",
        help = "Card number to print (1-based)"
    )]
    pub card: usize,

    /// Print only the snippet body, no header.
    #[arg(long = "body-only", help = "Print only the snippet body")]
    pub body_only: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `showreel list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by snippet language.
    #[arg(short = 'l', long = "lang", value_enum, help = "Filter by language")]
    pub language: Option<Language>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One ID per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `showreel completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `showreel config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.deck`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Snippet languages accepted by `--lang`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Language {
    Ruby,
    /// Also accepted as `ts`.
    #[value(alias = "ts")]
    TypeScript,
    /// Also accepted as `js`.
    #[value(alias = "js")]
    JavaScript,
    Html,
    Css,
    Sql,
    Yaml,
    Bash,
}

impl From<Language> for showreel_core::domain::Language {
    fn from(lang: Language) -> Self {
        use showreel_core::domain::Language as Core;
        match lang {
            Language::Ruby => Core::Ruby,
            Language::TypeScript => Core::TypeScript,
            Language::JavaScript => Core::JavaScript,
            Language::Html => Core::Html,
            Language::Css => Core::Css,
            Language::Sql => Core::Sql,
            Language::Yaml => Core::Yaml,
            Language::Bash => Core::Bash,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", showreel_core::domain::Language::from(*self))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn language_maps_to_core() {
        use showreel_core::domain::Language as Core;
        assert_eq!(Core::from(Language::Ruby), Core::Ruby);
        assert_eq!(Core::from(Language::TypeScript), Core::TypeScript);
        assert_eq!(Core::from(Language::Bash), Core::Bash);
    }

    #[test]
    fn parse_play_command() {
        let cli = Cli::parse_from(["showreel", "play", "fullstack", "--interval", "5000"]);
        if let Commands::Play(args) = cli.command {
            assert_eq!(args.deck.as_deref(), Some("fullstack"));
            assert_eq!(args.interval, Some(5000));
            assert!(!args.no_auto);
        } else {
            panic!("expected Play command");
        }
    }

    #[test]
    fn parse_show_defaults_to_first_card() {
        let cli = Cli::parse_from(["showreel", "show", "integration"]);
        if let Commands::Show(args) = cli.command {
            assert_eq!(args.card, 1);
        } else {
            panic!("expected Show command");
        }
    }

    #[test]
    fn typescript_alias() {
        let cli = Cli::parse_from(["showreel", "list", "--lang", "ts"]);
        if let Commands::List(args) = cli.command {
            assert_eq!(args.language, Some(Language::TypeScript));
        } else {
            panic!("expected List command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["showreel", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
