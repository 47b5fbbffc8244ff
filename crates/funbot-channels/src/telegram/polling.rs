//! Long-polling update loop and Channel trait implementation.

use super::types::{TgResponse, TgUpdate, TgUser};
use super::TelegramChannel;
use async_trait::async_trait;
use funbot_core::{
    error::FunbotError,
    message::{CallbackQuery, IncomingMessage, OutgoingMessage},
    traits::Channel,
};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

const MAX_BACKOFF_SECS: u64 = 60;

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn start(&self) -> Result<mpsc::Receiver<IncomingMessage>, FunbotError> {
        self.register_commands().await;

        let (tx, rx) = mpsc::channel(64);
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let allowed_users = self.config.allowed_users.clone();
        let last_update_id = self.last_update_id.clone();

        info!("Telegram channel starting long polling...");

        tokio::spawn(async move {
            let mut backoff_secs: u64 = 1;

            loop {
                let offset = last_update_id.lock().await.map(|id| id + 1);

                let mut url = format!("{base_url}/getUpdates?timeout=30");
                if let Some(off) = offset {
                    url.push_str(&format!("&offset={off}"));
                }

                let resp = match client
                    .get(&url)
                    .timeout(Duration::from_secs(35))
                    .send()
                    .await
                {
                    Ok(r) => r,
                    Err(e) => {
                        error!("telegram poll error (retry in {backoff_secs}s): {e}");
                        tokio::time::sleep(Duration::from_secs(backoff_secs)).await;
                        backoff_secs = (backoff_secs * 2).min(MAX_BACKOFF_SECS);
                        continue;
                    }
                };

                let body: TgResponse<Vec<TgUpdate>> = match resp.json().await {
                    Ok(b) => b,
                    Err(e) => {
                        error!("telegram parse error (retry in {backoff_secs}s): {e}");
                        tokio::time::sleep(Duration::from_secs(backoff_secs)).await;
                        backoff_secs = (backoff_secs * 2).min(MAX_BACKOFF_SECS);
                        continue;
                    }
                };

                if !body.ok {
                    error!(
                        "telegram API error (retry in {backoff_secs}s): {}",
                        body.description.unwrap_or_default()
                    );
                    tokio::time::sleep(Duration::from_secs(backoff_secs)).await;
                    backoff_secs = (backoff_secs * 2).min(MAX_BACKOFF_SECS);
                    continue;
                }

                backoff_secs = 1;

                let updates = body.result.unwrap_or_default();

                if let Some(last_update) = updates.last() {
                    *last_update_id.lock().await = Some(last_update.update_id);
                }

                for update in updates {
                    let Some(incoming) = to_incoming(update, &allowed_users) else {
                        continue;
                    };
                    if tx.send(incoming).await.is_err() {
                        info!("telegram channel receiver dropped, stopping poll");
                        return;
                    }
                }
            }
        });

        Ok(rx)
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), FunbotError> {
        let chat_id_str = message
            .reply_target
            .as_deref()
            .ok_or_else(|| FunbotError::Channel("no reply_target on outgoing message".into()))?;

        let chat_id: i64 = chat_id_str.parse().map_err(|e| {
            FunbotError::Channel(format!("invalid telegram chat_id '{chat_id_str}': {e}"))
        })?;

        match message.edit_message_id {
            Some(message_id) => self.edit_text(chat_id, message_id, &message).await,
            None => self.send_text(chat_id, &message).await,
        }
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<(), FunbotError> {
        self.answer_callback_query(callback_id).await
    }

    async fn stop(&self) -> Result<(), FunbotError> {
        info!("Telegram channel stopped");
        Ok(())
    }
}

/// Convert a raw update into an [`IncomingMessage`].
///
/// Returns `None` for updates the bot does not handle (non-text messages,
/// empty callbacks) and for senders outside `allowed_users`.
pub(crate) fn to_incoming(update: TgUpdate, allowed_users: &[i64]) -> Option<IncomingMessage> {
    let (user, chat_id, text, callback) = if let Some(cb) = update.callback_query {
        let Some(action) = cb.action() else {
            debug!("telegram: ignoring callback {} without data", cb.id);
            return None;
        };
        // The chat of the keyboard message; private chats share the user's id.
        let chat_id = cb.message.as_ref().map_or(cb.from.id, |m| m.chat.id);
        let callback = CallbackQuery {
            id: cb.id,
            message_id: cb.message.as_ref().map(|m| m.message_id),
            action,
        };
        (cb.from, chat_id, String::new(), Some(callback))
    } else if let Some(msg) = update.message {
        let text = msg.text?;
        let user = msg.from?;
        (user, msg.chat.id, text, None)
    } else {
        return None;
    };

    if !is_allowed(&user, allowed_users) {
        warn!("ignoring update from unauthorized user {}", user.id);
        return None;
    }

    Some(IncomingMessage {
        id: Uuid::new_v4(),
        channel: "telegram".to_string(),
        sender_id: user.id.to_string(),
        sender_name: Some(user.first_name),
        text,
        timestamp: chrono::Utc::now(),
        reply_target: Some(chat_id.to_string()),
        callback,
    })
}

fn is_allowed(user: &TgUser, allowed_users: &[i64]) -> bool {
    allowed_users.is_empty() || allowed_users.contains(&user.id)
}
