//! Remote quote source port
//!
//! Defines how the application talks to the remote placeholder endpoint.

use async_trait::async_trait;
use quotes_domain::Quote;
use thiserror::Error;

/// Errors that can occur while talking to the remote endpoint
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("HTTP error: {status}")]
    HttpStatus { status: u16 },

    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    #[error("Timeout")]
    Timeout,
}

/// Source of remote quotes
///
/// Implementations (adapters) live in the infrastructure layer. Every quote
/// returned by `fetch_quotes` is expected to carry the `"Server"` category.
#[async_trait]
pub trait RemoteQuoteSource: Send + Sync {
    /// Fetch the current remote quotes
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, RemoteError>;

    /// Send one quote to the remote endpoint; the response body is not used
    async fn publish_quote(&self, quote: &Quote) -> Result<(), RemoteError>;
}
