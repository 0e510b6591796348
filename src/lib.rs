//! imgbot - Download images from subreddits.
//!
//! This library fetches posts from subreddits, resolves each post's URL to
//! a direct image or album archive, and downloads matched media to a local
//! directory.
//!
//! # Features
//!
//! - Direct image downloads (png, gif, gifv, jpg, jpeg)
//! - Imgur album downloads as expanded zip archives
//! - Indirect pages scraped with per-domain selector rules
//! - User-overridable selector rules via a JSON file
//! - Stickied/self/NSFW/album/gif post filtering
//! - One worker task per subreddit
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use imgbot::{
//!     route_posts, HttpTransport, PostFeed, RedditFeed, Resolver, RouteOptions,
//!     SelectorRegistry, SubredditStats,
//! };
//! use imgbot::config::{SortMode, TimeWindow};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = Arc::new(HttpTransport::new("imgbot/0.1")?);
//!     let feed = RedditFeed::new(transport.clone());
//!     let resolver = Resolver::new(SelectorRegistry::builtin());
//!
//!     let posts = feed
//!         .posts("pics", SortMode::Hot, TimeWindow::Day, 10)
//!         .await?;
//!
//!     let options = RouteOptions {
//!         download_albums: true,
//!         download_gifs: true,
//!         download_nsfw: false,
//!         destination: ".".into(),
//!     };
//!     let mut stats = SubredditStats::new("pics".to_string());
//!     route_posts(transport.as_ref(), &resolver, &options, &posts, &mut stats).await;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod feed;
pub mod fs;
pub mod net;
pub mod output;
pub mod resolve;
pub mod router;
pub mod scrape;
pub mod selectors;

// Re-exports for convenience
pub use config::Config;
pub use download::{GlobalStats, SubredditStats};
pub use error::{Error, Result};
pub use feed::{Post, PostFeed, RedditFeed};
pub use net::{HttpTransport, Transport};
pub use resolve::{Resolution, Resolver};
pub use router::{route_posts, RouteOptions};
pub use selectors::{SelectorRegistry, SelectorRule};
