//! Game-launch orchestration: the operations the transport layer drives.

#[cfg(test)]
mod tests;

use crate::achievements::{self, Achievement};
use crate::catalog::{self, Game};
use crate::profile::{HistoryEntry, Language};
use crate::store::ProfileStore;
use funbot_core::error::FunbotError;
use funbot_core::traits::Clock;
use std::sync::Arc;
use tracing::info;

/// Entries shown under "recent games" on the profile.
pub const RECENT_HISTORY_LEN: usize = 3;

/// Result of a launch, enough to render the confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    pub game_name: String,
    /// Catalog URL, or the placeholder for unknown games.
    pub url: &'static str,
    /// Achievements unlocked by this launch.
    pub newly_unlocked: Vec<Achievement>,
    pub games_played: u64,
}

/// Read-only data for rendering a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub language: Language,
    pub games_played: u64,
    pub favorite_game: Option<Game>,
    pub achievements: Vec<Achievement>,
    /// At most [`RECENT_HISTORY_LEN`] entries, oldest first.
    pub recent_history: Vec<HistoryEntry>,
}

/// Applies user actions to the profile store.
#[derive(Clone)]
pub struct Orchestrator {
    store: ProfileStore,
    clock: Arc<dyn Clock>,
}

impl Orchestrator {
    pub fn new(store: ProfileStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Count a launch of `game_name`, record it, and re-check achievements.
    ///
    /// The whole update happens under the user's lock. Names outside the
    /// catalog are still counted; only their URL degrades.
    pub fn handle_launch(&self, user_id: &str, game_name: &str) -> LaunchOutcome {
        let (newly_unlocked, games_played) = self.store.update(user_id, |profile| {
            // Read under the lock so history order matches lock order.
            profile.record_launch(game_name, self.clock.now());
            let qualifying = achievements::evaluate(profile);
            (profile.grant(&qualifying), profile.games_played)
        });

        for a in &newly_unlocked {
            info!("{user_id} unlocked achievement: {}", a.tag());
        }

        LaunchOutcome {
            game_name: game_name.to_string(),
            url: catalog::launch_url(game_name),
            newly_unlocked,
            games_played,
        }
    }

    pub fn handle_set_language(&self, user_id: &str, code: &str) -> Result<Language, FunbotError> {
        self.store.set_language(user_id, code)
    }

    pub fn handle_set_favorite(&self, user_id: &str, name: &str) -> Result<Game, FunbotError> {
        self.store.set_favorite(user_id, name)
    }

    pub fn profile_view(&self, user_id: &str) -> ProfileView {
        self.store.update(user_id, |p| ProfileView {
            language: p.language,
            games_played: p.games_played,
            favorite_game: p.favorite_game,
            achievements: p.achievements().to_vec(),
            recent_history: p.history.recent(RECENT_HISTORY_LEN),
        })
    }

    /// The user's interface language (creating the profile if needed).
    pub fn language_of(&self, user_id: &str) -> Language {
        self.store.update(user_id, |p| p.language)
    }
}
