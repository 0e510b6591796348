//! Download strategies.
//!
//! This module provides:
//! - Direct image downloading
//! - Album archive downloading and expansion
//! - Download statistics tracking

pub mod album;
pub mod direct;
pub mod state;

pub use album::download_album;
pub use direct::download_image;
pub use state::{GlobalStats, SubredditStats};
