//! Message processing: route a single update to its handler and reply.

use super::Gateway;
use crate::commands::{self, Command, CommandContext};
use funbot_core::message::{IncomingMessage, OutgoingMessage};
use tracing::{debug, error, info, warn};

impl Gateway {
    /// Process a single incoming update.
    pub(super) async fn handle_message(&self, incoming: IncomingMessage) {
        let Some(channel) = self.channels.get(&incoming.channel) else {
            warn!("update from unknown channel '{}'", incoming.channel);
            return;
        };

        let ctx = CommandContext {
            orchestrator: &self.orchestrator,
            incoming: &incoming,
        };

        let reply = if let Some(callback) = &incoming.callback {
            info!(
                "[{}] {} pressed {:?}",
                incoming.channel,
                incoming.sender_name.as_deref().unwrap_or("unknown"),
                callback.action
            );
            // Acknowledge first so the client's button spinner stops.
            if let Err(e) = channel.answer_callback(&callback.id).await {
                warn!("failed to answer callback {}: {e}", callback.id);
            }
            commands::handle_action(&callback.action, &ctx)
        } else if let Some(cmd) = Command::parse(&incoming.text) {
            info!(
                "[{}] {} ran {:?}",
                incoming.channel,
                incoming.sender_name.as_deref().unwrap_or("unknown"),
                cmd
            );
            commands::handle(cmd, &ctx)
        } else {
            debug!("ignoring non-command text from {}", incoming.sender_id);
            return;
        };

        self.send(&incoming, reply).await;
    }

    async fn send(&self, incoming: &IncomingMessage, msg: OutgoingMessage) {
        if let Some(channel) = self.channels.get(&incoming.channel) {
            if let Err(e) = channel.send(msg).await {
                error!("failed to send message: {e}");
            }
        }
    }
}
