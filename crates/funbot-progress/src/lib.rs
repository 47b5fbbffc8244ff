//! # funbot-progress
//!
//! Player progression kept in process memory: one [`Profile`] per user,
//! a bounded play history, and achievements derived from it.

pub mod achievements;
pub mod catalog;
pub mod profile;
pub mod session;
pub mod store;

pub use achievements::Achievement;
pub use catalog::Game;
pub use profile::{HistoryEntry, Language, Profile};
pub use session::{LaunchOutcome, Orchestrator, ProfileView};
pub use store::ProfileStore;
