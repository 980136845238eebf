//! REPL loop for the quote shell

use crate::app::QuoteApp;
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::SimpleSyncProgress;
use crate::repl::command::{ReplCommand, parse_repl_command};
use colored::Colorize;
use quotes_application::{NoSyncProgress, SyncProgressNotifier, SyncSchedule};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use tracing::warn;

const HISTORY_CAPACITY: usize = 500;
const DEFAULT_EXPORT_FILE: &str = "quotes.json";

/// What the loop does after a command
#[derive(Debug, PartialEq, Eq)]
pub enum ReplFlow {
    Continue(String),
    Quit,
}

/// Interactive quote shell
pub struct QuoteRepl {
    app: QuoteApp,
    config: ReplConfig,
    schedule: SyncSchedule,
}

impl QuoteRepl {
    pub fn new(app: QuoteApp, config: ReplConfig) -> Self {
        let schedule = SyncSchedule::new(app.settings().interval);
        Self {
            app,
            config,
            schedule,
        }
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.config.history_file else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("History disabled ({}): {}", path.display(), e);
                editor
            }
        }
    }

    /// Run the interactive REPL
    pub async fn run(mut self) -> std::io::Result<()> {
        let mut editor = self.line_editor();
        self.print_welcome();

        loop {
            self.sync_if_due().await;

            let prompt = DefaultPrompt::new(
                DefaultPromptSegment::Basic(format!("quotes [{}]", self.app.session().filter())),
                DefaultPromptSegment::Empty,
            );

            match editor.read_line(&prompt)? {
                Signal::Success(line) => match self.handle(parse_repl_command(&line)).await {
                    ReplFlow::Continue(output) => {
                        if !output.is_empty() {
                            println!("{}", output);
                        }
                    }
                    ReplFlow::Quit => {
                        println!("Bye!");
                        break;
                    }
                },
                Signal::CtrlC => {
                    println!("^C");
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                #[allow(unreachable_patterns)]
                _ => {}
            }
        }

        Ok(())
    }

    async fn sync_if_due(&mut self) {
        let progress: &dyn SyncProgressNotifier = if self.config.show_progress {
            &SimpleSyncProgress
        } else {
            &NoSyncProgress
        };
        self.app.sync_if_due(&mut self.schedule, progress).await;
    }

    /// Run one command against the session.
    ///
    /// Failures become output lines; the loop never stops on an error.
    pub async fn handle(&mut self, command: ReplCommand) -> ReplFlow {
        let result = match command {
            ReplCommand::New => self.app.show(None),
            ReplCommand::Add { text, category } => self.app.add(&text, &category, false).await,
            ReplCommand::Category(name) => self.app.select_category(&name),
            ReplCommand::Categories => Ok(self.app.categories().trim_end().to_string()),
            ReplCommand::List(category) => Ok(self
                .app
                .list(category.as_deref(), quotes_domain::OutputFormat::Text)
                .trim_end()
                .to_string()),
            ReplCommand::Export(path) => {
                let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));
                self.app.export_to(&path)
            }
            ReplCommand::Import(path) => self.app.import_from(&path),
            ReplCommand::Sync => {
                // Explicit runs restart the periodic interval
                self.schedule.mark_run(std::time::Instant::now());
                self.app.sync(&NoSyncProgress).await
            }
            ReplCommand::Last => Ok(self
                .app
                .last_viewed()
                .unwrap_or_else(|| "No quote shown yet in this session.".dimmed().to_string())),
            ReplCommand::Help => Ok(Self::help_text()),
            ReplCommand::Quit => return ReplFlow::Quit,
            ReplCommand::Usage(usage) => Ok(format!("Usage: {}", usage)),
            ReplCommand::Unknown(input) => Ok(format!(
                "Unknown command: {}\nType /help for available commands",
                input
            )),
        };

        ReplFlow::Continue(match result {
            Ok(output) => output,
            Err(e) => ConsoleFormatter::error(&e.to_string()),
        })
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "Quote Generator".bold());
        println!(
            "{} quotes, category: {}",
            self.app.session().store().len(),
            self.app.session().filter()
        );
        if let Some(last) = self.app.last_viewed() {
            println!("{}", last);
        }
        println!("Press Enter for a new quote, /help for commands.");
        println!();
    }

    fn help_text() -> String {
        [
            "Commands:",
            "  <Enter>, /new              - Show a random quote",
            "  /add <text> | <category>   - Add a quote",
            "  /category <name|all>       - Select a category",
            "  /categories                - List categories",
            "  /list [category]           - List quotes",
            "  /export [path]             - Export quotes (default quotes.json)",
            "  /import <path>             - Import quotes from a JSON file",
            "  /sync                      - Sync with the server now",
            "  /last                      - Show the last viewed quote",
            "  /quit, /exit, /q           - Exit",
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::app;

    fn repl() -> QuoteRepl {
        QuoteRepl::new(
            app(),
            ReplConfig {
                show_progress: false,
                history_file: None,
            },
        )
    }

    async fn output(repl: &mut QuoteRepl, line: &str) -> String {
        match repl.handle(parse_repl_command(line)).await {
            ReplFlow::Continue(output) => output,
            ReplFlow::Quit => panic!("unexpected quit for {line:?}"),
        }
    }

    #[tokio::test]
    async fn test_add_then_select_then_show() {
        let mut repl = repl();

        let added = output(&mut repl, "/add Keep going. | Motivation").await;
        assert!(added.starts_with("Quote added successfully!"));

        assert_eq!(
            output(&mut repl, "/category Motivation").await,
            "Category: Motivation"
        );
        assert_eq!(
            output(&mut repl, "").await,
            "\"Keep going.\" - (Motivation)"
        );
        assert_eq!(
            output(&mut repl, "/last").await,
            "Last viewed: \"Keep going.\" - (Motivation)"
        );
    }

    #[tokio::test]
    async fn test_errors_do_not_stop_the_loop() {
        let mut repl = repl();

        let err = output(&mut repl, "/add only text").await;
        assert!(err.starts_with("Error: Please fill in both quote and category"));

        let err = output(&mut repl, "/sync").await;
        assert_eq!(err, "Error: Sync is disabled in the configuration");

        assert_eq!(repl.app.session().store().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_category_selection_warns() {
        let mut repl = repl();
        let output = output(&mut repl, "/category Poetry").await;
        assert_eq!(
            output,
            format!(
                "Category: Poetry\n{}",
                crate::output::console::NO_QUOTES_MESSAGE
            )
        );
    }

    #[tokio::test]
    async fn test_quit() {
        let mut repl = repl();
        assert_eq!(repl.handle(ReplCommand::Quit).await, ReplFlow::Quit);
    }

    #[tokio::test]
    async fn test_export_and_import_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backup.json");
        let mut repl = repl();

        let exported = output(&mut repl, &format!("/export {}", path.display())).await;
        assert!(exported.starts_with("Exported 2 quotes"));

        let imported = output(&mut repl, &format!("/import {}", path.display())).await;
        assert_eq!(imported, "Quotes imported successfully! (2 added)");
        assert_eq!(repl.app.session().store().len(), 4);
    }
}
