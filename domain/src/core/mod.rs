//! Core domain concepts shared across all subdomains.
//!
//! - [`error::QuoteError`]: validation failures for a single quote
//! - [`error::ImportError`]: failures while merging imported JSON

pub mod error;
pub mod string;
