//! Subreddit post feeds.

pub mod reddit;

pub use reddit::RedditFeed;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::{SortMode, TimeWindow};
use crate::error::Result;

/// One listing entry from a subreddit feed.
///
/// Supplied by the feed and consumed read-only by the router.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub stickied: bool,
    #[serde(default)]
    pub is_self: bool,
    #[serde(default)]
    pub over_18: bool,
}

/// Ordered source of posts for a subreddit.
#[async_trait]
pub trait PostFeed: Send + Sync {
    /// Fetch up to `limit` posts from a subreddit, in feed order.
    async fn posts(
        &self,
        subreddit: &str,
        sort: SortMode,
        time: TimeWindow,
        limit: u32,
    ) -> Result<Vec<Post>>;
}
