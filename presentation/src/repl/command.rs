//! REPL command parsing

use std::path::PathBuf;

/// A parsed line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Show a random quote (also an empty line)
    New,
    /// `/add <text> | <category>`
    Add { text: String, category: String },
    /// `/category <name|all>`
    Category(String),
    Categories,
    /// `/list [category]`
    List(Option<String>),
    /// `/export [path]`
    Export(Option<PathBuf>),
    /// `/import <path>`
    Import(PathBuf),
    Sync,
    Last,
    Help,
    Quit,
    /// Known command, bad arguments
    Usage(&'static str),
    Unknown(String),
}

/// Parse one line of input.
pub fn parse_repl_command(line: &str) -> ReplCommand {
    let line = line.trim();
    if line.is_empty() {
        return ReplCommand::New;
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name {
        "/new" | "/n" => ReplCommand::New,
        "/add" | "/a" => parse_add(rest),
        "/category" | "/c" => {
            if rest.is_empty() {
                ReplCommand::Usage("/category <name|all>")
            } else {
                ReplCommand::Category(rest.to_string())
            }
        }
        "/categories" => ReplCommand::Categories,
        "/list" | "/l" => ReplCommand::List(non_empty(rest)),
        "/export" => ReplCommand::Export(non_empty(rest).map(PathBuf::from)),
        "/import" => match non_empty(rest) {
            Some(path) => ReplCommand::Import(PathBuf::from(path)),
            None => ReplCommand::Usage("/import <path>"),
        },
        "/sync" => ReplCommand::Sync,
        "/last" => ReplCommand::Last,
        "/help" | "/h" | "/?" => ReplCommand::Help,
        "/quit" | "/exit" | "/q" => ReplCommand::Quit,
        _ => ReplCommand::Unknown(line.to_string()),
    }
}

/// Missing pieces are passed through empty so validation reports them.
fn parse_add(rest: &str) -> ReplCommand {
    if rest.is_empty() {
        return ReplCommand::Usage("/add <text> | <category>");
    }
    let (text, category) = rest.rsplit_once('|').unwrap_or((rest, ""));
    ReplCommand::Add {
        text: text.trim().to_string(),
        category: category.trim().to_string(),
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
