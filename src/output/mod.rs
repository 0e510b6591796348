//! User-facing console output.
//!
//! Per-post outcomes surface through these styled notices; everything
//! else goes through `tracing`.

pub mod console;
pub mod stats;

pub use console::{
    print_banner, print_config_summary, print_error, print_info, print_skip, print_success,
    print_warning,
};
pub use stats::{print_global_stats, print_subreddit_stats};
