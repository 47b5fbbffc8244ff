use thiserror::Error;

/// Top-level error type for funbot.
#[derive(Debug, Error)]
pub enum FunbotError {
    /// A language code or game name outside the known set.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// Error from a messaging channel.
    #[error("channel error: {0}")]
    Channel(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
