//! Statistics reporting.

use console::style;

use crate::download::{GlobalStats, SubredditStats};

/// Print statistics for a single subreddit.
pub fn print_subreddit_stats(stats: &SubredditStats) {
    println!();
    println!(
        "{}",
        style(format!("Statistics for r/{}:", stats.subreddit)).bold()
    );
    println!("  Images:   {}", stats.image_count);
    println!("  Albums:   {}", stats.album_count);
    println!("  Filtered: {} (sticky/self/NSFW)", stats.filtered_count);
    println!("  Skipped:  {}", stats.skipped_count);
    println!("  Total:    {} downloaded", stats.total_downloaded());
}

/// Print global statistics across all subreddits.
pub fn print_global_stats(stats: &GlobalStats) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Global Statistics:").bold());
    println!("  Subreddits processed: {}", stats.subreddits_processed);
    if stats.subreddits_failed > 0 {
        println!(
            "  Subreddits failed:    {}",
            style(stats.subreddits_failed).red()
        );
    }
    println!("  Images:   {}", stats.image_count);
    println!("  Albums:   {}", stats.album_count);
    println!("  Filtered: {}", stats.filtered_count);
    println!("  Skipped:  {}", stats.skipped_count);
    println!("  Total:    {} downloaded", stats.total_downloaded());
    println!("{}", style("═".repeat(50)).dim());
}
