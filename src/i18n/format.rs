//! Format helpers for strings with placeholders.
//!
//! Resolution happens first, then `{name}` placeholders are substituted.

use super::t;
use funbot_progress::Language;

/// Format the launch confirmation.
pub fn starting_game(lang: Language, game: &str, url: &str) -> String {
    t("starting_game", lang)
        .replace("{game}", game)
        .replace("{url}", url)
}

/// Format the favorite game confirmation.
pub fn favorite_set(lang: Language, game: &str) -> String {
    t("favorite_set", lang).replace("{game}", game)
}

/// Format an achievement unlock notice.
pub fn new_achievement(lang: Language, badge: &str) -> String {
    t("new_achievement", lang).replace("{achievement}", badge)
}
