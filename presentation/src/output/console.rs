//! Console output formatter for quotes

use colored::Colorize;
use quotes_application::SyncReport;
use quotes_domain::{ALL_CATEGORIES, CategoryFilter, Quote};

/// Shown when the selected category has no quotes
pub const NO_QUOTES_MESSAGE: &str = "No quotes available for this category.";

/// Formats quotes and command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// `"<text>" - (<category>)`
    pub fn quote(quote: &Quote) -> String {
        format!(
            "{} {}",
            format!("\"{}\"", quote.text()).bold(),
            format!("- ({})", quote.category()).cyan()
        )
    }

    /// A quote, or the "no quotes" message when nothing matched
    pub fn quote_or_empty(quote: Option<&Quote>) -> String {
        match quote {
            Some(quote) => Self::quote(quote),
            None => NO_QUOTES_MESSAGE.yellow().to_string(),
        }
    }

    /// One line per category, marking the selected one
    pub fn categories(categories: &[String], selected: &CategoryFilter) -> String {
        let mut output = String::new();
        for category in categories {
            let marker = if category == selected.as_str() {
                "*".green().bold().to_string()
            } else {
                " ".to_string()
            };
            let label = if category == ALL_CATEGORIES {
                format!("{} {}", category, "(All Categories)".dimmed())
            } else {
                category.to_string()
            };
            output.push_str(&format!("{} {}\n", marker, label));
        }
        output
    }

    /// Numbered quote lines
    pub fn list(quotes: &[&Quote]) -> String {
        if quotes.is_empty() {
            return format!("{}\n", NO_QUOTES_MESSAGE.yellow());
        }

        let width = quotes.len().to_string().len();
        let mut output = String::new();
        for (i, quote) in quotes.iter().enumerate() {
            output.push_str(&format!(
                "{:>width$}. {}\n",
                i + 1,
                Self::quote(quote),
                width = width
            ));
        }
        output
    }

    /// Format as JSON (same shape as the export file)
    pub fn list_json(quotes: &[&Quote]) -> String {
        serde_json::to_string_pretty(quotes).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn quote_added(quote: &Quote) -> String {
        format!(
            "{}\n{}",
            "Quote added successfully!".green(),
            Self::quote(quote)
        )
    }

    pub fn imported(added: usize) -> String {
        format!(
            "{} ({} added)",
            "Quotes imported successfully!".green(),
            added
        )
    }

    pub fn exported(count: usize, path: &std::path::Path) -> String {
        format!(
            "{} {} quotes to {}",
            "Exported".green(),
            count,
            path.display()
        )
    }

    pub fn sync_report(report: &SyncReport) -> String {
        format!(
            "{} (removed {}, added {}, {} total)",
            report.status.green(),
            report.outcome.removed,
            report.outcome.added,
            report.total
        )
    }

    pub fn last_viewed(quote: &Quote) -> String {
        format!("{} {}", "Last viewed:".dimmed(), Self::quote(quote))
    }

    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotes_domain::ReconcileOutcome;

    fn plain() {
        colored::control::set_override(false);
    }

    fn quote(text: &str, category: &str) -> Quote {
        Quote::new(text, category).unwrap()
    }

    #[test]
    fn test_quote_line() {
        plain();
        assert_eq!(
            ConsoleFormatter::quote(&quote("Breathe.", "Life")),
            "\"Breathe.\" - (Life)"
        );
    }

    #[test]
    fn test_quote_or_empty() {
        plain();
        assert_eq!(ConsoleFormatter::quote_or_empty(None), NO_QUOTES_MESSAGE);
    }

    #[test]
    fn test_categories_mark_selection() {
        plain();
        let categories = vec!["all".to_string(), "Life".to_string()];
        let output = ConsoleFormatter::categories(&categories, &CategoryFilter::parse("Life"));
        assert_eq!(output, "  all (All Categories)\n* Life\n");
    }

    #[test]
    fn test_list_numbers_lines() {
        plain();
        let a = quote("A", "X");
        let b = quote("B", "Y");
        assert_eq!(
            ConsoleFormatter::list(&[&a, &b]),
            "1. \"A\" - (X)\n2. \"B\" - (Y)\n"
        );
        assert_eq!(
            ConsoleFormatter::list(&[]),
            format!("{}\n", NO_QUOTES_MESSAGE)
        );
    }

    #[test]
    fn test_list_json_matches_export_shape() {
        let a = quote("A", "X");
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::list_json(&[&a])).unwrap();
        assert_eq!(json, serde_json::json!([{ "text": "A", "category": "X" }]));
    }

    #[test]
    fn test_sync_report() {
        plain();
        let report = SyncReport {
            outcome: ReconcileOutcome {
                removed: 5,
                added: 5,
            },
            total: 8,
            status: quotes_application::SYNC_STATUS,
        };
        assert_eq!(
            ConsoleFormatter::sync_report(&report),
            "Quotes synced with server. (removed 5, added 5, 8 total)"
        );
    }
}
