//! reqwest-backed transport.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{Error, Result};
use crate::net::{ensure_scheme, Fetched, Transport};

/// Transport over a shared reqwest client.
///
/// One instance is shared by the feed, resolver, and downloads so TCP
/// connections are reused across all requests in the process.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the given user agent.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Fetched> {
        let url = ensure_scheme(url);

        tracing::debug!("GET {}", url);

        let response = self.client.get(url.as_ref()).send().await.map_err(|e| {
            tracing::warn!("Request to {} failed: {}", url, e);
            Error::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Encountered bad url: {} (HTTP {})", url, status);
            return Err(Error::BadStatus {
                url: url.into_owned(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().to_string();
        let body = response.bytes().await?.to_vec();

        Ok(Fetched { final_url, body })
    }
}
