//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use showreel_core::application::CarouselView;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`.  *Not* suppressed in quiet mode; errors
    /// must always be visible.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Card rendering ─────────────────────────────────────────────────────

    /// Render a carousel snapshot as a full-card block.
    ///
    /// Produces a header line, an indicator row of position dots, and the
    /// snippet body.  Used both by `show` and by the `play` redraw loop.
    pub fn render_card(&self, view: &CarouselView) -> String {
        let card = &view.card;
        let mut out = String::new();

        let title_line = format!(
            "{} [{}]{}",
            card.title,
            card.language,
            card.category
                .map(|c| format!(" ({c})"))
                .unwrap_or_default()
        );
        if self.no_color {
            out.push_str(&title_line);
        } else {
            out.push_str(&title_line.cyan().bold().to_string());
        }
        out.push('\n');

        if self.no_color {
            out.push_str(&card.description);
        } else {
            out.push_str(&card.description.dimmed().to_string());
        }
        out.push('\n');

        out.push_str(&indicator_row(view.index, view.len));
        out.push_str("\n\n");
        out.push_str(&card.body);
        out.push('\n');
        out
    }

    /// Clear the screen; used between frames in `play`.
    pub fn clear(&self) -> io::Result<()> {
        self.term.clear_screen()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    /// Shared terminal handle, for commands that read keys.
    pub fn term(&self) -> &Term {
        &self.term
    }
}

/// Position indicator: one dot per card, the active one filled.
///
/// `● ○ ○ ○` for index 0 of 4.
fn indicator_row(index: usize, len: usize) -> String {
    let mut row = String::with_capacity(len * 2);
    for i in 0..len {
        if i > 0 {
            row.push(' ');
        }
        row.push(if i == index { '\u{25cf}' } else { '\u{25cb}' });
    }
    row
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;
    use showreel_core::domain::{Card, Language};

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: OutputFormat::Plain, // avoid TTY detection in tests
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn sample_view() -> CarouselView {
        CarouselView {
            index: 1,
            len: 3,
            pending: None,
            card: Card::new("Demo", Language::Sql, "SELECT 1;", "one line"),
            deck_name: "Test".into(),
        }
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn error_not_suppressed_in_quiet_mode() {
        // error() must always write; calling it in quiet mode should not
        // silently drop the message.
        let out = make_manager(true, true);
        assert!(out.error("something went wrong").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        let colored = make_manager(false, false);
        let no_color = make_manager(false, true);
        assert!(colored.supports_color());
        assert!(!no_color.supports_color());
    }

    #[test]
    fn render_card_contains_title_and_body() {
        let out = make_manager(false, true);
        let rendered = out.render_card(&sample_view());
        assert!(rendered.contains("Demo [sql]"));
        assert!(rendered.contains("SELECT 1;"));
        assert!(rendered.contains("one line"));
    }

    #[test]
    fn indicator_marks_active_position() {
        assert_eq!(indicator_row(0, 3), "\u{25cf} \u{25cb} \u{25cb}");
        assert_eq!(indicator_row(2, 3), "\u{25cb} \u{25cb} \u{25cf}");
        assert_eq!(indicator_row(0, 1), "\u{25cf}");
    }

    #[test]
    fn format_accessor_returns_resolved() {
        let out = make_manager(false, false);
        assert_eq!(out.format(), OutputFormat::Plain);
    }
}
