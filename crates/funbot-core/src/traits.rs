use crate::{
    error::FunbotError,
    message::{IncomingMessage, OutgoingMessage},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Messaging Channel trait.
///
/// Every messaging platform implements this trait to receive updates
/// and send replies.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Start listening for incoming messages.
    /// Returns a receiver that yields incoming messages.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<IncomingMessage>, FunbotError>;

    /// Send a response back through this channel.
    async fn send(&self, message: OutgoingMessage) -> Result<(), FunbotError>;

    /// Acknowledge an inline button press so the client stops its spinner.
    async fn answer_callback(&self, _callback_id: &str) -> Result<(), FunbotError> {
        Ok(())
    }

    /// Graceful shutdown.
    async fn stop(&self) -> Result<(), FunbotError>;
}

/// Source of the current time, injected so progression can be tested
/// with deterministic timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
