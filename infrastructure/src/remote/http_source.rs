//! HTTP adapter for the placeholder posts endpoint.
//!
//! The endpoint returns an array of posts; only `title` is used. The first
//! `limit` titles become quotes tagged with the `"Server"` category.

use async_trait::async_trait;
use quotes_application::{RemoteError, RemoteQuoteSource};
use quotes_domain::{Quote, SERVER_CATEGORY};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("quote-generator/", env!("CARGO_PKG_VERSION"));

/// One item of the remote posts array. Other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RemotePost {
    #[serde(default)]
    pub title: Option<String>,
}

/// Map the first `limit` posts to server-tagged quotes.
///
/// Posts without a usable title are skipped (they still count toward the
/// limit, since the limit applies to what the endpoint returned).
pub fn posts_to_quotes(posts: Vec<RemotePost>, limit: usize) -> Vec<Quote> {
    posts
        .into_iter()
        .take(limit)
        .filter_map(|post| {
            let title = post.title?;
            Quote::new(&title, SERVER_CATEGORY).ok()
        })
        .collect()
}

/// [`RemoteQuoteSource`] backed by reqwest.
pub struct HttpQuoteSource {
    client: reqwest::Client,
    endpoint: String,
    limit: usize,
}

impl HttpQuoteSource {
    /// Create a source for `endpoint`, keeping at most `limit` quotes per fetch.
    pub fn new(
        endpoint: impl Into<String>,
        limit: usize,
        timeout: Option<Duration>,
    ) -> Result<Self, RemoteError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RemoteError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            limit,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_request_error(e: reqwest::Error) -> RemoteError {
        if e.is_timeout() {
            RemoteError::Timeout
        } else if e.is_decode() {
            RemoteError::InvalidBody(e.to_string())
        } else if let Some(status) = e.status() {
            RemoteError::HttpStatus {
                status: status.as_u16(),
            }
        } else {
            RemoteError::ConnectionError(e.to_string())
        }
    }
}

#[async_trait]
impl RemoteQuoteSource for HttpQuoteSource {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, RemoteError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(Self::map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let posts: Vec<RemotePost> = response.json().await.map_err(Self::map_request_error)?;
        let fetched = posts.len();
        let quotes = posts_to_quotes(posts, self.limit);

        debug!(
            "Fetched {} posts from {}, kept {} quotes",
            fetched,
            self.endpoint,
            quotes.len()
        );

        Ok(quotes)
    }

    async fn publish_quote(&self, quote: &Quote) -> Result<(), RemoteError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(quote)
            .send()
            .await
            .map_err(Self::map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Publishing quote returned HTTP {}", status.as_u16());
            return Err(RemoteError::HttpStatus {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
