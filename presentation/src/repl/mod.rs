//! Interactive shell
//!
//! One session per REPL run: the selected category and the last viewed
//! quote live as long as the shell does.

pub mod command;
pub mod shell;

pub use command::{ReplCommand, parse_repl_command};
pub use shell::{QuoteRepl, ReplFlow};
