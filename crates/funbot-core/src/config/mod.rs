mod channels;
mod defaults;


pub use channels::*;

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::error::FunbotError;
use defaults::*;

/// Env vars consulted, in order, when no bot token is configured.
pub const TOKEN_ENV_VARS: [&str; 2] = ["BOT_TOKEN", "TELEGRAM_BOT_TOKEN"];

/// Top-level bot configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub channel: ChannelConfig,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Directory for the daily rolling log file. Unset = stdout only.
    #[serde(default)]
    pub log_dir: Option<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Fill an empty Telegram bot token from the environment.
///
/// `lookup` is `std::env::var` in production; tests pass a closure.
pub fn apply_env_token<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let Some(tg) = config.channel.telegram.as_mut() else {
        return;
    };
    if !tg.bot_token.is_empty() {
        return;
    }
    if let Some(token) = TOKEN_ENV_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|v| !v.is_empty())
    {
        tg.bot_token = token;
    }
}

/// Parse configuration from TOML text.
pub fn parse(content: &str) -> Result<Config, FunbotError> {
    toml::from_str(content)
        .map_err(|e| FunbotError::Config(format!("failed to parse config: {e}")))
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist. A missing
/// `[channel.telegram]` table is treated as an enabled Telegram channel
/// whose token comes from the environment.
pub fn load(path: &str) -> Result<Config, FunbotError> {
    let path = Path::new(path);
    let mut config = if path.exists() {
        let content = std::fs::read_to_string(path)
            .inspect_err(|e| warn!("failed to read {}: {e}", path.display()))?;
        parse(&content)?
    } else {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        Config::default()
    };

    if config.channel.telegram.is_none() {
        config.channel.telegram = Some(TelegramConfig {
            enabled: true,
            ..Default::default()
        });
    }
    apply_env_token(&mut config, |name| std::env::var(name).ok());

    Ok(config)
}
