//! Download statistics tracking.

/// Per-subreddit download statistics.
#[derive(Debug, Default)]
pub struct SubredditStats {
    pub subreddit: String,

    // Successful downloads
    pub image_count: u64,
    pub album_count: u64,

    // Posts dropped by the stickied/self/NSFW filters
    pub filtered_count: u64,

    // Posts skipped for any other reason (unresolved, disabled album or
    // gif downloads, failed fetches)
    pub skipped_count: u64,
}

impl SubredditStats {
    /// Create statistics for a subreddit.
    pub fn new(subreddit: String) -> Self {
        Self {
            subreddit,
            ..Default::default()
        }
    }

    /// Record a downloaded image.
    pub fn increment_image(&mut self) {
        self.image_count += 1;
    }

    /// Record a downloaded album.
    pub fn increment_album(&mut self) {
        self.album_count += 1;
    }

    /// Record a post dropped by the post-level filters.
    pub fn increment_filtered(&mut self) {
        self.filtered_count += 1;
    }

    /// Record a skipped post.
    pub fn increment_skipped(&mut self) {
        self.skipped_count += 1;
    }

    /// Get total downloaded count.
    pub fn total_downloaded(&self) -> u64 {
        self.image_count + self.album_count
    }
}

/// Global statistics across all subreddits.
#[derive(Debug, Default)]
pub struct GlobalStats {
    pub image_count: u64,
    pub album_count: u64,
    pub filtered_count: u64,
    pub skipped_count: u64,
    pub subreddits_processed: u64,
    pub subreddits_failed: u64,
}

impl GlobalStats {
    /// Add statistics from a subreddit run.
    pub fn add_subreddit_stats(&mut self, stats: &SubredditStats) {
        self.image_count += stats.image_count;
        self.album_count += stats.album_count;
        self.filtered_count += stats.filtered_count;
        self.skipped_count += stats.skipped_count;
        self.subreddits_processed += 1;
    }

    /// Mark a subreddit as failed.
    pub fn mark_subreddit_failed(&mut self) {
        self.subreddits_failed += 1;
    }

    /// Get total downloaded count.
    pub fn total_downloaded(&self) -> u64 {
        self.image_count + self.album_count
    }
}
