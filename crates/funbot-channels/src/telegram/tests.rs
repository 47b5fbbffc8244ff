use super::polling::to_incoming;
use super::send::{edit_body, message_body, BOT_COMMANDS};
use super::MAX_MESSAGE_LEN;
use super::types::{TgResponse, TgUpdate};
use funbot_core::action::Action;
use funbot_core::message::{InlineButton, InlineKeyboard, OutgoingMessage, ParseMode};

fn update(json: &str) -> TgUpdate {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_text_message_becomes_incoming() {
    let u = update(
        r#"{
            "update_id": 10,
            "message": {
                "message_id": 5,
                "from": {"id": 42, "first_name": "Olena"},
                "chat": {"id": 42, "type": "private"},
                "text": "/profile"
            }
        }"#,
    );
    let msg = to_incoming(u, &[]).unwrap();
    assert_eq!(msg.channel, "telegram");
    assert_eq!(msg.sender_id, "42");
    assert_eq!(msg.sender_name.as_deref(), Some("Olena"));
    assert_eq!(msg.text, "/profile");
    assert_eq!(msg.reply_target.as_deref(), Some("42"));
    assert!(msg.callback.is_none());
}

#[test]
fn test_callback_query_decodes_action() {
    let u = update(
        r#"{
            "update_id": 11,
            "callback_query": {
                "id": "cbq-1",
                "from": {"id": 42, "first_name": "Olena"},
                "message": {
                    "message_id": 77,
                    "chat": {"id": 42, "type": "private"},
                    "text": "Choose your favorite game:"
                },
                "data": "fav_Tetris"
            }
        }"#,
    );
    let msg = to_incoming(u, &[]).unwrap();
    let cb = msg.callback.unwrap();
    assert_eq!(cb.id, "cbq-1");
    assert_eq!(cb.message_id, Some(77));
    assert_eq!(cb.action, Action::SetFavorite("Tetris".to_string()));
    assert!(msg.text.is_empty());
    assert_eq!(msg.reply_target.as_deref(), Some("42"));
}

#[test]
fn test_callback_without_message_uses_sender_chat() {
    let u = update(
        r#"{
            "update_id": 12,
            "callback_query": {
                "id": "cbq-2",
                "from": {"id": 9, "first_name": "Taras"},
                "data": "Snake"
            }
        }"#,
    );
    let msg = to_incoming(u, &[]).unwrap();
    assert_eq!(msg.reply_target.as_deref(), Some("9"));
    let cb = msg.callback.unwrap();
    assert!(cb.message_id.is_none());
    assert_eq!(cb.action, Action::Launch("Snake".to_string()));
}

#[test]
fn test_callback_without_data_ignored() {
    let u = update(
        r#"{
            "update_id": 13,
            "callback_query": {"id": "cbq-3", "from": {"id": 9, "first_name": "Taras"}}
        }"#,
    );
    assert!(to_incoming(u, &[]).is_none());
}

#[test]
fn test_non_text_message_ignored() {
    let u = update(
        r#"{
            "update_id": 14,
            "message": {
                "message_id": 6,
                "from": {"id": 42, "first_name": "Olena"},
                "chat": {"id": 42}
            }
        }"#,
    );
    assert!(to_incoming(u, &[]).is_none());
}

#[test]
fn test_allowed_users_filter() {
    let json = r#"{
        "update_id": 15,
        "message": {
            "message_id": 7,
            "from": {"id": 42, "first_name": "Olena"},
            "chat": {"id": 42},
            "text": "/start"
        }
    }"#;
    assert!(to_incoming(update(json), &[1, 2]).is_none());
    assert!(to_incoming(update(json), &[42]).is_some());
}

#[test]
fn test_get_updates_response_parses() {
    let body: TgResponse<Vec<TgUpdate>> = serde_json::from_str(
        r#"{"ok": true, "result": [{"update_id": 1}, {"update_id": 2}]}"#,
    )
    .unwrap();
    assert!(body.ok);
    assert_eq!(body.result.unwrap().len(), 2);
}

#[test]
fn test_message_body_with_keyboard_and_parse_mode() {
    let msg = OutgoingMessage {
        text: "Choose".to_string(),
        ..Default::default()
    }
    .with_parse_mode(ParseMode::Html)
    .with_keyboard(InlineKeyboard::single_column([
        InlineButton::callback("🐍 Snake", Action::Launch("Snake".into())),
        InlineButton::url("Open", "https://example.com/"),
    ]));

    let body = message_body(42, "Choose", &msg, true);
    assert_eq!(body["chat_id"], 42);
    assert_eq!(body["parse_mode"], "HTML");
    let rows = body["reply_markup"]["inline_keyboard"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0]["callback_data"], "Snake");
    assert!(rows[0][0].get("url").is_none());
    assert_eq!(rows[1][0]["url"], "https://example.com/");
    assert!(rows[1][0].get("callback_data").is_none());
}

#[test]
fn test_message_body_without_markup() {
    let msg = OutgoingMessage {
        text: "hi".to_string(),
        ..Default::default()
    }
    .with_keyboard(InlineKeyboard::default());
    let body = message_body(1, "hi", &msg, false);
    assert!(body.get("reply_markup").is_none());
    assert!(body.get("parse_mode").is_none());
}

#[test]
fn test_edit_body_keeps_keyboard() {
    let msg = OutgoingMessage {
        text: "🎮 Starting Snake! Good luck!".to_string(),
        ..Default::default()
    }
    .with_keyboard(InlineKeyboard::single_column([InlineButton::url(
        "▶️ Play",
        "https://telegram-snake.vercel.app/",
    )]));

    let body = edit_body(42, 7, &msg);
    assert_eq!(body["message_id"], 7);
    assert_eq!(body["text"], "🎮 Starting Snake! Good luck!");
    assert_eq!(
        body["reply_markup"]["inline_keyboard"][0][0]["url"],
        "https://telegram-snake.vercel.app/"
    );
}

#[test]
fn test_edit_body_truncates_to_one_message() {
    let msg = OutgoingMessage {
        text: "щ".repeat(MAX_MESSAGE_LEN + 10),
        ..Default::default()
    };

    let body = edit_body(42, 7, &msg);
    let text = body["text"].as_str().unwrap();
    assert_eq!(text.chars().count(), MAX_MESSAGE_LEN);
}

#[test]
fn test_registered_commands() {
    let names: Vec<_> = BOT_COMMANDS.iter().map(|(c, _)| *c).collect();
    assert_eq!(
        names,
        vec!["start", "games", "help", "language", "profile", "favorite"]
    );
}
