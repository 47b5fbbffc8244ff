//! Message sending: text, edits, callback acknowledgements, and command registration.

use super::types::TgInlineKeyboardMarkup;
use super::{TelegramChannel, MAX_MESSAGE_LEN};
use crate::utils::split_message;
use funbot_core::error::FunbotError;
use funbot_core::message::OutgoingMessage;
use serde_json::{json, Value};
use tracing::{info, warn};

/// Commands shown in the client's autocomplete menu.
pub(crate) const BOT_COMMANDS: [(&str, &str); 6] = [
    ("start", "Start the bot"),
    ("games", "Show list of games"),
    ("help", "List all commands"),
    ("language", "Choose your language"),
    ("profile", "Show your profile"),
    ("favorite", "Choose your favorite game"),
];

/// Build a `sendMessage` / `editMessageText` body.
///
/// The keyboard is attached to the final chunk only, so it stays under the
/// text the user reads last.
pub(crate) fn message_body(
    chat_id: i64,
    text: &str,
    message: &OutgoingMessage,
    with_markup: bool,
) -> Value {
    let mut body = json!({
        "chat_id": chat_id,
        "text": text,
    });
    if let Some(mode) = message.parse_mode {
        body["parse_mode"] = json!(mode.as_str());
    }
    if with_markup {
        if let Some(keyboard) = &message.keyboard {
            body["reply_markup"] = json!(TgInlineKeyboardMarkup::from(keyboard));
        }
    }
    body
}

/// Build an `editMessageText` body. An edited message cannot grow into
/// several messages, so only the first chunk is kept.
pub(crate) fn edit_body(chat_id: i64, message_id: i64, message: &OutgoingMessage) -> Value {
    let chunks = split_message(&message.text, MAX_MESSAGE_LEN);
    if chunks.len() > 1 {
        warn!(
            "edit of message {message_id} truncated: {} chars, keeping the first {MAX_MESSAGE_LEN}",
            message.text.chars().count()
        );
    }
    let text = chunks.first().copied().unwrap_or_default();
    let mut body = message_body(chat_id, text, message, true);
    body["message_id"] = json!(message_id);
    body
}

impl TelegramChannel {
    /// Send a message to a chat, splitting long text into several messages.
    pub(crate) async fn send_text(
        &self,
        chat_id: i64,
        message: &OutgoingMessage,
    ) -> Result<(), FunbotError> {
        let chunks = split_message(&message.text, MAX_MESSAGE_LEN);
        let last = chunks.len().saturating_sub(1);

        for (i, chunk) in chunks.into_iter().enumerate() {
            let body = message_body(chat_id, chunk, message, i == last);
            self.post_with_plain_fallback("sendMessage", body).await?;
        }

        Ok(())
    }

    /// Replace the text (and keyboard) of a message the bot sent earlier.
    pub(crate) async fn edit_text(
        &self,
        chat_id: i64,
        message_id: i64,
        message: &OutgoingMessage,
    ) -> Result<(), FunbotError> {
        let body = edit_body(chat_id, message_id, message);
        self.post_with_plain_fallback("editMessageText", body).await
    }

    /// POST `body` to `method`. When Telegram rejects the markup entities,
    /// retry once without `parse_mode`.
    async fn post_with_plain_fallback(
        &self,
        method: &str,
        mut body: Value,
    ) -> Result<(), FunbotError> {
        let url = format!("{}/{method}", self.base_url);

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| FunbotError::Channel(format!("telegram {method} failed: {e}")))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let error_text = resp.text().await.unwrap_or_default();
        if !error_text.contains("can't parse entities") {
            return Err(FunbotError::Channel(format!(
                "telegram {method} failed ({status}): {error_text}"
            )));
        }

        warn!("markup parse failed, retrying as plain text: {error_text}");
        if let Some(obj) = body.as_object_mut() {
            obj.remove("parse_mode");
        }
        let plain_resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| FunbotError::Channel(format!("telegram {method} (plain) failed: {e}")))?;
        if !plain_resp.status().is_success() {
            let plain_err = plain_resp.text().await.unwrap_or_default();
            return Err(FunbotError::Channel(format!(
                "telegram {method} (plain fallback) failed: {plain_err}"
            )));
        }
        Ok(())
    }

    /// Acknowledge a callback query.
    pub(crate) async fn answer_callback_query(&self, callback_id: &str) -> Result<(), FunbotError> {
        let url = format!("{}/answerCallbackQuery", self.base_url);
        let body = json!({ "callback_query_id": callback_id });

        self.client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                FunbotError::Channel(format!("telegram answerCallbackQuery failed: {e}"))
            })?;

        Ok(())
    }

    /// Register bot commands with Telegram so users see an autocomplete menu.
    /// Best-effort: logs failures but does not propagate errors.
    pub(crate) async fn register_commands(&self) {
        let commands: Vec<Value> = BOT_COMMANDS
            .iter()
            .map(|(command, description)| {
                json!({ "command": command, "description": description })
            })
            .collect();
        let body = json!({ "commands": commands });

        let url = format!("{}/setMyCommands", self.base_url);
        match self.client.post(&url).json(&body).send().await {
            Ok(resp) if resp.status().is_success() => {
                info!("registered Telegram bot commands");
            }
            Ok(resp) => {
                let body = resp.text().await.unwrap_or_default();
                warn!("failed to register Telegram bot commands: {body}");
            }
            Err(e) => {
                warn!("failed to register Telegram bot commands: {e}");
            }
        }
    }
}
