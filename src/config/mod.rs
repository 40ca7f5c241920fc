//! Configuration management for habits.
//!
//! This module handles loading and saving configuration from `~/.habits/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, StatsConfig};
