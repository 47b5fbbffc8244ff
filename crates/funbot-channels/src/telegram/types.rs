//! Telegram Bot API (de)serialization types.

use funbot_core::action::Action;
use funbot_core::message::{ButtonTarget, InlineKeyboard};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct TgResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TgUpdate {
    pub update_id: i64,
    pub message: Option<TgMessage>,
    pub callback_query: Option<TgCallbackQuery>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TgMessage {
    pub message_id: i64,
    pub from: Option<TgUser>,
    pub chat: TgChat,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TgCallbackQuery {
    pub id: String,
    pub from: TgUser,
    /// The message the keyboard was attached to. Absent for very old messages.
    pub message: Option<TgMessage>,
    pub data: Option<String>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub(crate) struct TgUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TgChat {
    pub id: i64,
}

/// `reply_markup` body for an inline keyboard.
#[derive(Debug, Serialize)]
pub(crate) struct TgInlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<TgInlineKeyboardButton>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TgInlineKeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<&InlineKeyboard> for TgInlineKeyboardMarkup {
    fn from(keyboard: &InlineKeyboard) -> Self {
        let inline_keyboard = keyboard
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|button| {
                        let (callback_data, url) = match &button.target {
                            ButtonTarget::Callback(action) => (Some(action.encode()), None),
                            ButtonTarget::Url(url) => (None, Some(url.clone())),
                        };
                        TgInlineKeyboardButton {
                            text: button.label.clone(),
                            callback_data,
                            url,
                        }
                    })
                    .collect()
            })
            .collect();
        Self { inline_keyboard }
    }
}

impl TgCallbackQuery {
    /// Decode the button payload, if any.
    pub fn action(&self) -> Option<Action> {
        self.data.as_deref().and_then(Action::decode)
    }
}
