//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod quote_session;
pub mod sync_quotes;
