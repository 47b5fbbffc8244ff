//! In-memory profile store keyed by user identity.
//!
//! Each profile sits behind its own mutex, so mutations for one user are
//! serialized while different users proceed in parallel. Profiles are
//! created lazily and live as long as the process.


use crate::catalog::Game;
use crate::profile::{Language, Profile};
use funbot_core::error::FunbotError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, warn};

type Slot = Arc<Mutex<Profile>>;

/// Owner of every user's [`Profile`].
#[derive(Clone, Default)]
pub struct ProfileStore {
    profiles: Arc<RwLock<HashMap<String, Slot>>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the user's slot, registering a default profile on first use.
    fn slot(&self, user_id: &str) -> Slot {
        {
            let profiles = self.profiles.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(slot) = profiles.get(user_id) {
                return slot.clone();
            }
        }
        let mut profiles = self
            .profiles
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        profiles
            .entry(user_id.to_string())
            .or_insert_with(|| {
                debug!("created profile for {user_id}");
                Arc::new(Mutex::new(Profile::default()))
            })
            .clone()
    }

    /// Run `f` against the user's profile inside that user's critical section.
    pub fn update<R>(&self, user_id: &str, f: impl FnOnce(&mut Profile) -> R) -> R {
        let slot = self.slot(user_id);
        let mut profile = slot.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut profile)
    }

    /// Snapshot of the user's profile, creating a default one if needed.
    pub fn get_or_create(&self, user_id: &str) -> Profile {
        self.update(user_id, |p| p.clone())
    }

    /// Set the interface language from its code (`"en"` / `"ua"`).
    pub fn set_language(&self, user_id: &str, code: &str) -> Result<Language, FunbotError> {
        let language = code.parse::<Language>().inspect_err(|e| {
            warn!("rejected language for {user_id}: {e}");
        })?;
        self.update(user_id, |p| p.language = language);
        Ok(language)
    }

    /// Set the favorite game from its catalog name.
    pub fn set_favorite(&self, user_id: &str, name: &str) -> Result<Game, FunbotError> {
        let game = name.parse::<Game>().inspect_err(|e| {
            warn!("rejected favorite for {user_id}: {e}");
        })?;
        self.update(user_id, |p| p.favorite_game = Some(game));
        Ok(game)
    }

    /// Number of registered profiles.
    pub fn len(&self) -> usize {
        self.profiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
