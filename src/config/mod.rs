//! Configuration module for imgbot.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument parsing and merging
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, OptionsConfig, SelectorsConfig, SourcesConfig};
pub use modes::{SortMode, TimeWindow};
pub use validation::{clean_subreddit_name, validate_config};
