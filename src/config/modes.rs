//! Feed sort modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subreddit listing sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Currently trending posts (default).
    #[default]
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

impl SortMode {
    /// Listing path segment for this sort.
    pub fn path_segment(&self) -> &'static str {
        match self {
            SortMode::Hot => "hot",
            SortMode::New => "new",
            SortMode::Rising => "rising",
            SortMode::Controversial => "controversial",
            SortMode::Top => "top",
        }
    }

    /// Whether this sort takes a time window qualifier.
    pub fn is_time_filtered(&self) -> bool {
        matches!(self, SortMode::Top)
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hot" => Ok(SortMode::Hot),
            "new" => Ok(SortMode::New),
            "rising" => Ok(SortMode::Rising),
            "controversial" => Ok(SortMode::Controversial),
            "top" => Ok(SortMode::Top),
            _ => Err(format!("Unknown sort mode: {}", s)),
        }
    }
}

/// Time window qualifying top listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Hour,
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl TimeWindow {
    /// Query parameter value for this window.
    pub fn query_value(&self) -> &'static str {
        match self {
            TimeWindow::Hour => "hour",
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
            TimeWindow::Month => "month",
            TimeWindow::Year => "year",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query_value())
    }
}

impl FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hour" => Ok(TimeWindow::Hour),
            "day" => Ok(TimeWindow::Day),
            "week" => Ok(TimeWindow::Week),
            "month" => Ok(TimeWindow::Month),
            "year" => Ok(TimeWindow::Year),
            _ => Err(format!("Unknown time window: {}", s)),
        }
    }
}
