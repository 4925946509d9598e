//! `showreel config`: read and write configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let updated = set_config_value(config, &key, &value)?;
            write_config(&updated)?;
            output.success(&format!("Set {key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.deck" => Ok(config.defaults.deck.clone()),
        "defaults.interval_ms" => Ok(config.defaults.interval_ms.to_string()),
        "defaults.swipe_threshold" => Ok(config.defaults.swipe_threshold.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

/// Apply one `key = value` assignment to the loaded config.
fn set_config_value(mut config: AppConfig, key: &str, value: &str) -> CliResult<AppConfig> {
    match key {
        "defaults.deck" => config.defaults.deck = value.to_string(),
        "defaults.interval_ms" => {
            config.defaults.interval_ms = value.parse().map_err(|_| CliError::ConfigError {
                message: format!("'{value}' is not a valid interval in milliseconds"),
                source: None,
            })?;
        }
        "defaults.swipe_threshold" => {
            config.defaults.swipe_threshold =
                value.parse().map_err(|_| CliError::ConfigError {
                    message: format!("'{value}' is not a valid threshold"),
                    source: None,
                })?;
        }
        "output.no_color" => {
            config.output.no_color = value.parse().map_err(|_| CliError::ConfigError {
                message: format!("'{value}' is not true or false"),
                source: None,
            })?;
        }
        "output.format" => config.output.format = value.to_string(),
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            });
        }
    }
    Ok(config)
}

/// Persist the configuration to the default location.
fn write_config(config: &AppConfig) -> CliResult<()> {
    let path = AppConfig::config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::ConfigError {
            message: format!("Failed to create config directory: {e}"),
            source: Some(Box::new(e)),
        })?;
    }
    let serialised = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    std::fs::write(&path, serialised).map_err(|e| CliError::ConfigError {
        message: format!("Failed to write '{}': {e}", path.display()),
        source: Some(Box::new(e)),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
