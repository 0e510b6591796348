//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, SortMode, TimeWindow};

/// Subreddit image downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "imgbot",
    version,
    about = "Download images from subreddits",
    long_about = "A CLI tool to download images and albums posted to subreddits.\n\n\
                  Direct image links are downloaded as-is, imgur albums are fetched as\n\
                  archives and expanded, and other pages are scraped for their image link."
)]
pub struct Args {
    /// Subreddit(s) to download from.
    /// Can specify multiple subreddits separated by spaces.
    #[arg(short, long, value_delimiter = ' ', num_args = 1..)]
    pub subreddit: Option<Vec<String>>,

    /// Directory downloads are written to (must already exist).
    #[arg(short = 'd', long = "directory", env = "IMGBOT_DIRECTORY")]
    pub download_directory: Option<PathBuf>,

    /// Listing sort order.
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Time window for top listings.
    #[arg(long, value_enum)]
    pub time: Option<TimeArg>,

    /// Maximum number of posts to fetch per subreddit.
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Skip album posts.
    #[arg(long)]
    pub no_albums: bool,

    /// Skip gif posts.
    #[arg(long)]
    pub no_gifs: bool,

    /// Include posts marked NSFW.
    #[arg(long)]
    pub nsfw: bool,

    /// JSON file with domain selector overrides.
    #[arg(long)]
    pub selectors: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI sort order argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    /// Currently trending posts.
    Hot,
    /// Newest posts first.
    New,
    /// Posts gaining traction.
    Rising,
    /// Most controversial posts.
    Controversial,
    /// Top-scored posts within a time window.
    Top,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Hot => SortMode::Hot,
            SortArg::New => SortMode::New,
            SortArg::Rising => SortMode::Rising,
            SortArg::Controversial => SortMode::Controversial,
            SortArg::Top => SortMode::Top,
        }
    }
}

/// CLI time window argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TimeArg {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl From<TimeArg> for TimeWindow {
    fn from(arg: TimeArg) -> Self {
        match arg {
            TimeArg::Hour => TimeWindow::Hour,
            TimeArg::Day => TimeWindow::Day,
            TimeArg::Week => TimeWindow::Week,
            TimeArg::Month => TimeWindow::Month,
            TimeArg::Year => TimeWindow::Year,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        // Override subreddits if provided
        if let Some(subreddits) = self.subreddit {
            config.sources.subreddits = subreddits;
        }

        // Override options if provided
        if let Some(dir) = self.download_directory {
            config.options.download_directory = Some(dir);
        }

        if let Some(sort) = self.sort {
            config.options.sort = sort.into();
        }

        if let Some(time) = self.time {
            config.options.time = time.into();
        }

        if let Some(limit) = self.limit {
            config.options.limit = limit;
        }

        if let Some(selectors) = self.selectors {
            config.selectors.overrides_file = Some(selectors);
        }

        // Boolean flags (only override if set to non-default)
        if self.no_albums {
            config.options.download_albums = false;
        }

        if self.no_gifs {
            config.options.download_gifs = false;
        }

        if self.nsfw {
            config.options.download_nsfw = true;
        }
    }
}
