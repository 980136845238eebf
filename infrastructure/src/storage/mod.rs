//! Storage adapters.
//!
//! - [`JsonFileStorage`]: persistent state as files in a data directory
//! - [`MemorySessionStorage`]: session-scoped state kept in memory

mod json_file;
mod session;

pub use json_file::{CATEGORY_FILE, JsonFileStorage, QUOTES_FILE};
pub use session::MemorySessionStorage;
