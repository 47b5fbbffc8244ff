//! /profile: the localized progression card.

use super::CommandContext;
use crate::i18n::t;
use chrono::Local;
use funbot_core::message::{OutgoingMessage, ParseMode};
use funbot_progress::{Language, ProfileView};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub(super) fn handle_profile(ctx: &CommandContext<'_>, lang: Language) -> OutgoingMessage {
    let view = ctx.orchestrator.profile_view(ctx.sender_id());
    let name = ctx.incoming.sender_name.as_deref().unwrap_or_default();
    OutgoingMessage::reply_to(ctx.incoming, render_profile(&view, name, lang))
        .with_parse_mode(ParseMode::Html)
}

/// Render the profile card as Telegram HTML.
pub(super) fn render_profile(view: &ProfileView, name: &str, lang: Language) -> String {
    let favorite = view
        .favorite_game
        .map(|g| g.name().to_string())
        .unwrap_or_else(|| t("favorite_none", lang).into_owned());

    let achievements = if view.achievements.is_empty() {
        t("no_achievements", lang).into_owned()
    } else {
        view.achievements
            .iter()
            .map(|a| a.badge())
            .collect::<Vec<_>>()
            .join("\n")
    };

    let recent = if view.recent_history.is_empty() {
        t("no_games_played", lang).into_owned()
    } else {
        view.recent_history
            .iter()
            .map(|e| {
                let when = e.played_at.with_timezone(&Local).format(TIME_FORMAT);
                format!("{} — {when}", escape_html(&e.game))
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "{title}\n\
         {name_label} {name}\n\
         {language_label} {language}\n\
         {played_label} {played}\n\
         {favorite_label} {favorite}\n\n\
         {achievements_title}\n{achievements}\n\n\
         {history_title}\n{recent}",
        title = t("profile_title", lang),
        name_label = t("name_label", lang),
        name = escape_html(name),
        language_label = t("language_label", lang),
        language = t("language_name", view.language),
        played_label = t("games_played_label", lang),
        played = view.games_played,
        favorite_label = t("favorite_label", lang),
        achievements_title = t("achievements", lang),
        history_title = t("history_title", lang),
    )
}

/// Escape text for Telegram's HTML parse mode.
pub(super) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
