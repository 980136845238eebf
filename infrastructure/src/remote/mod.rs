//! Remote quote source adapters.

mod http_source;

pub use http_source::{HttpQuoteSource, RemotePost, posts_to_quotes};
