//! HTTP transport abstraction.
//!
//! The feed, resolver, and download strategies all go through the
//! [`Transport`] trait so the pipeline can be exercised without a network.

pub mod http;

pub use http::HttpTransport;

use std::borrow::Cow;

use async_trait::async_trait;

use crate::error::Result;

/// A fetched response body with its final URL after redirects.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub final_url: String,
    pub body: Vec<u8>,
}

impl Fetched {
    /// Response body decoded as UTF-8 text (lossy).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// HTTP GET capability.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch a URL, following redirects.
    ///
    /// Non-success statuses are logged and returned as
    /// [`Error::BadStatus`](crate::error::Error::BadStatus); callers treat
    /// them as a skip, never a crash.
    async fn get(&self, url: &str) -> Result<Fetched>;
}

/// Prefix a scheme-less URL with "http://".
///
/// Some websites post URLs without the protocol included.
pub fn ensure_scheme(url: &str) -> Cow<'_, str> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("http://{}", url))
    }
}
