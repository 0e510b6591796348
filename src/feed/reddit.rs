//! Reddit public listing feed.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::{SortMode, TimeWindow};
use crate::error::{Error, Result};
use crate::feed::{Post, PostFeed};
use crate::net::Transport;

/// Base URL for reddit listings.
const REDDIT_BASE: &str = "https://www.reddit.com";

/// Post feed backed by reddit's public JSON listings.
///
/// Listings are fetched unauthenticated from the `.json` form of the
/// subreddit's sorted view.
pub struct RedditFeed {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl RedditFeed {
    /// Create a feed over the shared transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: REDDIT_BASE.to_string(),
        }
    }
}

#[async_trait]
impl PostFeed for RedditFeed {
    async fn posts(
        &self,
        subreddit: &str,
        sort: SortMode,
        time: TimeWindow,
        limit: u32,
    ) -> Result<Vec<Post>> {
        let url = listing_url(&self.base_url, subreddit, sort, time, limit);

        let page = self
            .transport
            .get(&url)
            .await
            .map_err(|e| Error::Feed(format!("Could not fetch r/{} listing: {}", subreddit, e)))?;

        parse_listing(&page.body)
            .map_err(|e| Error::Feed(format!("Could not parse r/{} listing: {}", subreddit, e)))
    }
}

/// Build the listing URL for a subreddit, sort, and limit.
fn listing_url(
    base_url: &str,
    subreddit: &str,
    sort: SortMode,
    time: TimeWindow,
    limit: u32,
) -> String {
    let mut url = format!(
        "{}/r/{}/{}.json?limit={}&raw_json=1",
        base_url,
        subreddit,
        sort.path_segment(),
        limit
    );

    if sort.is_time_filtered() {
        url.push_str("&t=");
        url.push_str(time.query_value());
    }

    url
}

/// Deserialize a reddit listing document into posts, in feed order.
fn parse_listing(body: &[u8]) -> Result<Vec<Post>> {
    let listing: Listing = serde_json::from_slice(body)?;

    Ok(listing
        .data
        .children
        .into_iter()
        .map(|child| child.data)
        .collect())
}

#[derive(Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Deserialize)]
struct ListingData {
    children: Vec<Child>,
}

#[derive(Deserialize)]
struct Child {
    data: Post,
}
