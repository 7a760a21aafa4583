//! Configuration management: defaults, validation, loading from environment.

pub mod bot_config;
pub mod defaults;
pub mod validation;

pub use bot_config::{BotConfig, RejectedSetting};
