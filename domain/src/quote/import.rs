//! Lenient parsing of imported quote files

use crate::core::error::ImportError;
use crate::quote::entities::Quote;
use serde_json::Value;

/// Parse imported JSON into the quotes it contains.
///
/// The input must be a JSON array. Elements that are not objects with
/// non-empty string `text` and `category` fields are dropped; if nothing
/// survives, the import is rejected as a whole.
pub fn parse_imported(raw: &str) -> Result<Vec<Quote>, ImportError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| ImportError::Parse(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(ImportError::Format);
    };

    let quotes: Vec<Quote> = items.iter().filter_map(quote_from_value).collect();
    if quotes.is_empty() {
        return Err(ImportError::NoValidRecords);
    }

    Ok(quotes)
}

fn quote_from_value(value: &Value) -> Option<Quote> {
    let text = value.get("text")?.as_str()?;
    let category = value.get("category")?.as_str()?;
    Quote::new(text, category).ok()
}
