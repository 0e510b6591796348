//! Filename derivation from URLs.

use url::Url;

use crate::error::{Error, Result};
use crate::net::ensure_scheme;

/// Derive a local filename from a media URL's path basename.
///
/// "http://i.imgur.com/ASoeL.jpg" -> "ASoeL.jpg". Returns `None` when the
/// URL has no usable basename.
pub fn filename_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(ensure_scheme(url).as_ref()).ok()?;
    let basename = parsed
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()?;

    sanitize_filename(basename).ok()
}

/// Validate and sanitize a filename by replacing invalid characters.
///
/// Returns an error for path traversal, separators, null bytes, or names
/// that sanitize to nothing.
pub fn sanitize_filename(name: &str) -> Result<String> {
    // Reject path traversal attempts
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    // Sanitize remaining problematic characters
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_url() {
        assert_eq!(
            filename_from_url("http://i.imgur.com/ASoeL.jpg").as_deref(),
            Some("ASoeL.jpg")
        );
        assert_eq!(
            filename_from_url("https://x.com/albums/2024/pic.png").as_deref(),
            Some("pic.png")
        );
    }

    #[test]
    fn test_filename_from_url_ignores_trailing_slash() {
        assert_eq!(
            filename_from_url("http://x.com/pic.jpg/").as_deref(),
            Some("pic.jpg")
        );
    }

    #[test]
    fn test_filename_from_url_no_path() {
        assert_eq!(filename_from_url("http://x.com/"), None);
        assert_eq!(filename_from_url("http://x.com"), None);
    }

    #[test]
    fn test_sanitize_filename_valid() {
        assert_eq!(sanitize_filename("normal.jpg").unwrap(), "normal.jpg");
        assert_eq!(sanitize_filename("pic:1.jpg").unwrap(), "pic_1.jpg");
        assert_eq!(
            sanitize_filename("file*with?special.png").unwrap(),
            "file_with_special.png"
        );
    }

    #[test]
    fn test_sanitize_filename_path_traversal() {
        assert!(sanitize_filename("../etc/passwd").is_err());
        assert!(sanitize_filename("..\\windows\\system32").is_err());
    }

    #[test]
    fn test_sanitize_filename_path_separators() {
        assert!(sanitize_filename("path/to/file.jpg").is_err());
    }

    #[test]
    fn test_sanitize_filename_empty() {
        assert!(sanitize_filename("").is_err());
        assert!(sanitize_filename("   ").is_err());
    }
}
