//! Built-in bot commands and inline button actions.

mod actions;
mod menus;
mod profile;


pub use actions::handle_action;

use crate::i18n;
use funbot_core::message::{IncomingMessage, OutgoingMessage};
use funbot_progress::Orchestrator;

/// Grouped context for command execution.
pub struct CommandContext<'a> {
    pub orchestrator: &'a Orchestrator,
    pub incoming: &'a IncomingMessage,
}

impl CommandContext<'_> {
    fn sender_id(&self) -> &str {
        &self.incoming.sender_id
    }
}

/// Known bot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Games,
    Help,
    Language,
    Profile,
    Favorite,
}

impl Command {
    /// Parse a command from message text. Returns `None` for plain text and
    /// unknown `/` prefixes, which the bot ignores.
    pub fn parse(text: &str) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        // Strip @botname suffix (e.g. "/help@fun_bot" → "/help").
        let cmd = first.split('@').next().unwrap_or(first);
        match cmd {
            "/start" => Some(Self::Start),
            "/games" => Some(Self::Games),
            "/help" => Some(Self::Help),
            "/language" | "/lang" => Some(Self::Language),
            "/profile" => Some(Self::Profile),
            "/favorite" | "/favourite" => Some(Self::Favorite),
            _ => None,
        }
    }
}

/// Handle a command and return the reply.
pub fn handle(cmd: Command, ctx: &CommandContext<'_>) -> OutgoingMessage {
    let lang = ctx.orchestrator.language_of(ctx.sender_id());
    let reply = |text: String| OutgoingMessage::reply_to(ctx.incoming, text);
    match cmd {
        Command::Start => reply(i18n::t("start_message", lang).into_owned()),
        Command::Help => reply(i18n::t("help_message", lang).into_owned()),
        Command::Games => {
            reply(i18n::t("choose_game", lang).into_owned()).with_keyboard(menus::games())
        }
        Command::Favorite => reply(i18n::t("choose_favorite", lang).into_owned())
            .with_keyboard(menus::favorites()),
        Command::Language => reply(i18n::t("choose_language", lang).into_owned())
            .with_keyboard(menus::languages()),
        Command::Profile => profile::handle_profile(ctx, lang),
    }
}
