mod commands;
mod gateway;
mod i18n;

use clap::{Parser, Subcommand};
use funbot_channels::telegram::TelegramChannel;
use funbot_core::config::{self, shellexpand, BotConfig};
use funbot_core::traits::{Channel, SystemClock};
use funbot_progress::{Orchestrator, ProfileStore};
use std::collections::HashMap;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "funbot",
    version,
    about = "Fun Entertainment Bot: browser games, profiles and achievements"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot.
    Start,
    /// Show the loaded configuration and channel readiness.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;
    let _log_guard = init_logging(&cfg.bot);

    match cli.command {
        Commands::Start => {
            let mut channels: HashMap<String, Arc<dyn Channel>> = HashMap::new();

            if let Some(ref tg) = cfg.channel.telegram {
                if tg.enabled {
                    if tg.bot_token.is_empty() {
                        anyhow::bail!(
                            "Telegram is enabled but bot_token is empty. \
                             Set it in config.toml or the BOT_TOKEN env var."
                        );
                    }
                    let channel = TelegramChannel::new(tg.clone());
                    channels.insert("telegram".to_string(), Arc::new(channel));
                }
            }

            if channels.is_empty() {
                anyhow::bail!("No channels enabled. Enable at least one channel in config.toml.");
            }

            let orchestrator = Orchestrator::new(ProfileStore::new(), Arc::new(SystemClock));

            println!("{} — Starting bot...", cfg.bot.name);
            let gw = Arc::new(gateway::Gateway::new(channels, orchestrator));
            gw.run().await?;
        }
        Commands::Status => {
            println!("{} — Status Check\n", cfg.bot.name);
            println!("Config: {}", cli.config);
            println!("Log level: {}", cfg.bot.log_level);
            println!(
                "Log file: {}",
                cfg.bot.log_dir.as_deref().unwrap_or("stdout only")
            );
            println!();

            match cfg.channel.telegram {
                Some(ref tg) => println!(
                    "  telegram: {}",
                    if tg.enabled && !tg.bot_token.is_empty() {
                        "configured"
                    } else if tg.enabled {
                        "enabled but missing bot_token"
                    } else {
                        "disabled"
                    }
                ),
                None => println!("  telegram: not configured"),
            }
        }
    }

    Ok(())
}

/// Install the tracing subscriber: stdout always, plus a daily rolling file
/// when `log_dir` is set. The returned guard must live until exit.
fn init_logging(bot: &BotConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&bot.log_level));

    let (file_layer, guard) = match bot.log_dir.as_deref() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(shellexpand(dir), "funbot.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}
