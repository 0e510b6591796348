//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Minimum subreddit name length.
const MIN_SUBREDDIT_LENGTH: usize = 3;

/// Maximum subreddit name length.
const MAX_SUBREDDIT_LENGTH: usize = 21;

/// Maximum posts per listing request.
const MAX_LIMIT: u32 = 100;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_subreddits(&config.sources.subreddits)?;
    validate_limit(config.options.limit)?;
    validate_destination(config)?;

    Ok(())
}

/// Validate subreddit names.
pub fn validate_subreddits<S: AsRef<str>, I: IntoIterator<Item = S>>(subreddits: I) -> Result<()> {
    let subreddits: Vec<_> = subreddits.into_iter().collect();

    if subreddits.is_empty() {
        return Err(Error::MissingConfig(
            "subreddits (at least one subreddit required)".to_string(),
        ));
    }

    // Subreddit pattern: 3-21 chars, alphanumeric and underscores
    let name_pattern = Regex::new(r"^[A-Za-z0-9_]{3,21}$").unwrap();

    for subreddit in subreddits {
        let subreddit = subreddit.as_ref();

        let clean_name = clean_subreddit_name(subreddit);

        if clean_name.len() < MIN_SUBREDDIT_LENGTH {
            return Err(Error::ConfigValidation {
                field: "subreddits".to_string(),
                message: format!(
                    "Subreddit '{}' is too short (minimum {} characters)",
                    subreddit, MIN_SUBREDDIT_LENGTH
                ),
            });
        }

        if clean_name.len() > MAX_SUBREDDIT_LENGTH {
            return Err(Error::ConfigValidation {
                field: "subreddits".to_string(),
                message: format!(
                    "Subreddit '{}' is too long (maximum {} characters)",
                    subreddit, MAX_SUBREDDIT_LENGTH
                ),
            });
        }

        if !name_pattern.is_match(clean_name) {
            return Err(Error::ConfigValidation {
                field: "subreddits".to_string(),
                message: format!(
                    "Subreddit '{}' contains invalid characters. Only alphanumeric and underscores allowed.",
                    subreddit
                ),
            });
        }
    }

    Ok(())
}

/// Validate the post limit.
pub fn validate_limit(limit: u32) -> Result<()> {
    if limit == 0 || limit > MAX_LIMIT {
        return Err(Error::ConfigValidation {
            field: "limit".to_string(),
            message: format!("Limit must be between 1 and {} (got {})", MAX_LIMIT, limit),
        });
    }

    Ok(())
}

/// Validate that the download directory exists.
///
/// The tool never creates directories itself.
pub fn validate_destination(config: &Config) -> Result<()> {
    let destination = config.download_directory();

    if !destination.is_dir() {
        return Err(Error::ConfigValidation {
            field: "download_directory".to_string(),
            message: format!(
                "Directory '{}' does not exist or is not a directory",
                destination.display()
            ),
        });
    }

    Ok(())
}

/// Strip a leading "r/" or "/r/" prefix from a subreddit name.
pub fn clean_subreddit_name(name: &str) -> &str {
    name.trim_start_matches("/r/").trim_start_matches("r/")
}
