//! String helpers for log lines.

/// Shorten `s` to at most `max_chars` characters, marking the cut with `...`
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let cut = s.char_indices().nth(keep).map_or(s.len(), |(i, _)| i);
    format!("{}...", &s[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("carpe diem", 20), "carpe diem");
        assert_eq!(truncate("carpe diem quam minimum", 10), "carpe d...");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("éééé", 4), "éééé");
        assert_eq!(truncate("ééééé", 4), "é...");
        assert_eq!(truncate("aéébc", 4), "a...");
    }

    #[test]
    fn test_truncate_tiny_limit() {
        assert_eq!(truncate("quote", 2), "...");
    }
}
