//! # funbot-core
//!
//! Core types, traits, configuration, and error handling for the bot.

pub mod action;
pub mod config;
pub mod error;
pub mod message;
pub mod traits;
