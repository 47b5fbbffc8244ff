//! Inline button actions: launch, favorite, language.

use super::CommandContext;
use crate::i18n;
use funbot_core::action::Action;
use funbot_core::message::{InlineButton, InlineKeyboard, OutgoingMessage};
use funbot_progress::Game;

/// Apply a button action and return the text that replaces the menu message.
pub fn handle_action(action: &Action, ctx: &CommandContext<'_>) -> OutgoingMessage {
    let user = ctx.sender_id();
    let mut keyboard = None;
    let text = match action {
        Action::Launch(game) => {
            let outcome = ctx.orchestrator.handle_launch(user, game);
            let lang = ctx.orchestrator.language_of(user);
            let mut text = i18n::starting_game(lang, &outcome.game_name, outcome.url);
            for a in &outcome.newly_unlocked {
                text.push_str("\n\n");
                text.push_str(&i18n::new_achievement(lang, &a.badge()));
            }
            // Only catalog games have a real page to open.
            if outcome.game_name.parse::<Game>().is_ok() {
                keyboard = Some(InlineKeyboard::single_column([InlineButton::url(
                    i18n::t("play_button", lang),
                    outcome.url,
                )]));
            }
            text
        }
        Action::SetFavorite(game) => {
            let lang = ctx.orchestrator.language_of(user);
            match ctx.orchestrator.handle_set_favorite(user, game) {
                Ok(game) => i18n::favorite_set(lang, game.name()),
                Err(_) => i18n::t("invalid_selection", lang).into_owned(),
            }
        }
        // Confirmed in the newly selected language.
        Action::SetLanguage(code) => match ctx.orchestrator.handle_set_language(user, code) {
            Ok(lang) => i18n::t("language_set", lang).into_owned(),
            Err(_) => {
                let lang = ctx.orchestrator.language_of(user);
                i18n::t("invalid_selection", lang).into_owned()
            }
        },
    };

    let message_id = ctx.incoming.callback.as_ref().and_then(|cb| cb.message_id);
    let reply = OutgoingMessage::reply_to(ctx.incoming, text).editing(message_id);
    match keyboard {
        Some(keyboard) => reply.with_keyboard(keyboard),
        None => reply,
    }
}
