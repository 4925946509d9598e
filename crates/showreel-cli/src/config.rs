//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`SHOWREEL_DEFAULTS__DECK` etc.)
//! 3. Config file (`--config` path, or the default location if it exists)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for playback.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Deck played when `showreel play` is given no argument.
    pub deck: String,
    /// Auto-advance interval in milliseconds.
    pub interval_ms: u64,
    /// Swipe commit threshold (offset × velocity).
    pub swipe_threshold: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                deck: "fullstack".into(),
                interval_ms: 8000,
                swipe_threshold: 10_000.0,
            },
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, merging file, environment, and defaults.
    ///
    /// The `config_file` parameter is the path the user passed via `--config`.
    /// When given it must exist; when `None` the default location is read
    /// only if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("defaults.deck", "fullstack")?
            .set_default("defaults.interval_ms", 8000i64)?
            .set_default("defaults.swipe_threshold", 10_000.0f64)?
            .set_default("output.no_color", false)?
            .set_default("output.format", "human")?;

        match config_file {
            Some(path) => {
                builder = builder.add_source(config::File::from(path.clone()));
            }
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    builder = builder.add_source(config::File::from(default_path));
                }
            }
        }

        // SHOWREEL_DEFAULTS__DECK=integration overrides defaults.deck, etc.
        builder = builder.add_source(
            config::Environment::with_prefix("SHOWREEL")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.showreel.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "showreel", "showreel")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".showreel.toml"))
    }
}
