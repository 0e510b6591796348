//! File system utilities.

pub mod naming;

pub use naming::{filename_from_url, sanitize_filename};
