//! Full-sentence replies: welcome, help, menu prompts, confirmations.

use funbot_progress::Language;

pub(super) fn lookup(key: &str, lang: Language) -> Option<&'static str> {
    let (en, ua) = match key {
        "start_message" => (
            "Hi there! I'm Fun Entertainment Bot.\nType /games to play or /help to see available commands.",
            "Привіт! Я бот для розваг.\nНапишіть /games щоб грати або /help щоб побачити команди.",
        ),
        "choose_game" => ("Choose the game! Let's make some fun!", "Оберіть гру!"),
        "help_message" => (
            "📋 Available commands:\n\
             /start — Welcome message\n\
             /games — Show list of games\n\
             /language — Choose your language\n\
             /profile — Show your profile\n\
             /favorite — Choose your favorite game\n\
             /help — Show this help message",
            "📋 Доступні команди:\n\
             /start — Привітальне повідомлення\n\
             /games — Показати список ігор\n\
             /language — Змінити мову\n\
             /profile — Переглянути профіль\n\
             /favorite — Вибрати улюблену гру\n\
             /help — Показати це повідомлення",
        ),
        "choose_favorite" => ("Choose your favorite game:", "Оберіть улюблену гру:"),
        // Shown before the user has picked, so it carries both languages.
        "choose_language" => (
            "Choose your language / Оберіть мову:",
            "Choose your language / Оберіть мову:",
        ),
        "favorite_set" => (
            "❤️ Your favorite game is now: {game}",
            "❤️ Твоя улюблена гра тепер: {game}",
        ),
        "starting_game" => (
            "🎮 Starting {game}! Good luck!\n{url}",
            "🎮 Починаємо {game}! Удачі!\n{url}",
        ),
        "language_set" => ("✅ Language set to: English", "✅ Мова встановлена: Українська"),
        "new_achievement" => (
            "🏅 New achievement unlocked: {achievement}",
            "🏅 Нове досягнення: {achievement}",
        ),
        "invalid_selection" => (
            "⚠️ That option isn't available. Please pick one from the menu.",
            "⚠️ Такого варіанту немає. Оберіть із меню.",
        ),
        _ => return None,
    };
    Some(match lang {
        Language::En => en,
        Language::Ua => ua,
    })
}
