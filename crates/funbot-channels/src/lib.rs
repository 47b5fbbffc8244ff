//! # funbot-channels
//!
//! Messaging platform integrations for funbot.

pub mod telegram;
pub mod utils;
