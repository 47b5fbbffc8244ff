//! Inline keyboards for the game, favorite, and language menus.

use funbot_core::action::Action;
use funbot_core::message::{InlineButton, InlineKeyboard};
use funbot_progress::{Game, Language};

/// Launch buttons; presses come back as [`Action::Launch`].
pub(super) fn games() -> InlineKeyboard {
    InlineKeyboard::single_column(
        Game::ALL
            .iter()
            .map(|g| InlineButton::callback(g.label(), Action::Launch(g.name().to_string()))),
    )
}

pub(super) fn favorites() -> InlineKeyboard {
    InlineKeyboard::single_column(
        Game::ALL.iter().map(|g| {
            InlineButton::callback(g.label(), Action::SetFavorite(g.name().to_string()))
        }),
    )
}

pub(super) fn languages() -> InlineKeyboard {
    InlineKeyboard::single_column([
        InlineButton::callback(
            "Ukrainian",
            Action::SetLanguage(Language::Ua.code().to_string()),
        ),
        InlineButton::callback(
            "English",
            Action::SetLanguage(Language::En.code().to_string()),
        ),
    ])
}
