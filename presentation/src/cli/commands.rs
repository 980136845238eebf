//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for `quotes list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// One formatted line per quote
    Text,
    /// JSON array (same shape as the export file)
    Json,
}

impl From<ListFormat> for quotes_domain::OutputFormat {
    fn from(format: ListFormat) -> Self {
        match format {
            ListFormat::Text => quotes_domain::OutputFormat::Text,
            ListFormat::Json => quotes_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for quote-generator
#[derive(Parser, Debug)]
#[command(name = "quotes")]
#[command(author, version, about = "Random quotes by category, kept locally and synced with a server")]
#[command(long_about = r#"
Shows a random quote, optionally narrowed to one category. Quotes are kept in
the data directory between runs and can be exported to / imported from JSON.
Quotes tagged "Server" are replaced on every sync with the remote endpoint.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quotes.toml       Project-level config
3. ~/.config/quote-generator/config.toml   Global config

Example:
  quotes show --category Life
  quotes add "Stay hungry, stay foolish." Motivation
  quotes export --file backup.json
  quotes repl
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Directory holding saved quotes (overrides [storage] data_dir)
    #[arg(long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

impl Cli {
    /// The command to run; a bare `quotes` shows a random quote
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Show { category: None })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show a random quote
    Show {
        /// Only pick from this category ("all" for every category); remembered for next time
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Add a new quote
    Add {
        /// The quote text
        text: String,
        /// Its category
        category: String,
        /// Also POST the quote to the sync endpoint
        #[arg(long)]
        publish: bool,
    },

    /// List the categories, starting with "all"
    Categories,

    /// List quotes
    List {
        /// Only list this category
        #[arg(short, long)]
        category: Option<String>,
        /// Output format
        #[arg(short, long, value_enum)]
        output: Option<ListFormat>,
    },

    /// Export all quotes as a JSON file
    Export {
        /// Target file
        #[arg(short, long, default_value = "quotes.json")]
        file: PathBuf,
        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Import quotes from a JSON file
    Import {
        /// JSON array of {"text", "category"} objects
        file: PathBuf,
    },

    /// Replace the server quotes with the remote ones
    Sync {
        /// Keep syncing on the configured interval until Ctrl-C
        #[arg(short, long)]
        watch: bool,
    },

    /// Start the interactive shell
    Repl,

    /// Show configuration file locations
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_shows_quote() {
        let cli = Cli::try_parse_from(["quotes"]).unwrap();
        assert_eq!(cli.command(), Command::Show { category: None });
    }

    #[test]
    fn test_show_with_category() {
        let cli = Cli::try_parse_from(["quotes", "show", "-c", "Life"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Show {
                category: Some("Life".to_string())
            }
        );
    }

    #[test]
    fn test_add_requires_both_fields() {
        assert!(Cli::try_parse_from(["quotes", "add", "Only text"]).is_err());

        let cli =
            Cli::try_parse_from(["quotes", "add", "Stay hungry.", "Motivation", "--publish"])
                .unwrap();
        assert_eq!(
            cli.command(),
            Command::Add {
                text: "Stay hungry.".to_string(),
                category: "Motivation".to_string(),
                publish: true,
            }
        );
    }

    #[test]
    fn test_export_defaults_to_quotes_json() {
        let cli = Cli::try_parse_from(["quotes", "export"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Export {
                file: PathBuf::from("quotes.json"),
                stdout: false,
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["quotes", "list", "-o", "json", "--no-color", "-vv"]).unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.command(),
            Command::List {
                category: None,
                output: Some(ListFormat::Json),
            }
        );
    }

    #[test]
    fn test_list_format_maps_to_domain() {
        assert_eq!(
            quotes_domain::OutputFormat::from(ListFormat::Json),
            quotes_domain::OutputFormat::Json
        );
    }
}
