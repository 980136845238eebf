//! Quote domain.
//!
//! - [`entities::Quote`]: a validated `{text, category}` record
//! - [`filter::CategoryFilter`]: `"all"` or a single category
//! - [`store::QuoteStore`]: the ordered collection a session owns
//! - [`import::parse_imported`]: lenient parsing of imported JSON

pub mod entities;
pub mod filter;
pub mod import;
pub mod store;
