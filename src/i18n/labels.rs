//! Short labels used on the profile card and on buttons.

use funbot_progress::Language;

pub(super) fn lookup(key: &str, lang: Language) -> Option<&'static str> {
    let (en, ua) = match key {
        "profile_title" => ("👤 <b>Your profile</b>", "👤 <b>Твій профіль</b>"),
        "language_name" => ("English", "Українська"),
        "name_label" => ("🪪 Name:", "🪪 Ім'я:"),
        "language_label" => ("🌐 Language:", "🌐 Мова:"),
        "games_played_label" => ("🎮 Games played:", "🎮 Зіграно ігор:"),
        "favorite_label" => ("❤️ Favorite:", "❤️ Улюблена:"),
        "favorite_none" => ("None", "Немає"),
        "achievements" => ("🏆 Achievements:", "🏆 Досягнення:"),
        "no_achievements" => (
            "None yet. Play more games to earn achievements!",
            "Поки що немає. Грай більше, щоб отримати досягнення!",
        ),
        "history_title" => ("🕓 Recent games:", "🕓 Останні ігри:"),
        "no_games_played" => ("No games played yet.", "Ще не зіграно жодної гри."),
        "play_button" => ("▶️ Play", "▶️ Грати"),
        _ => return None,
    };
    Some(match lang {
        Language::En => en,
        Language::Ua => ua,
    })
}
