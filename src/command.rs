//! Operator command grammar.
//!
//! | Input | Command |
//! |-------|---------|
//! | `exit` | [`Command::Exit`] |
//! | `show` | [`Command::Show`] |
//! | `important` | [`Command::Important`] |
//! | `user <name>` | [`Command::User`] |
//! | `sort <criterion>` | [`Command::Sort`] |
//! | `date <yyyy[-mm[-dd]]>` | [`Command::Date`] |
//!
//! Keywords are case-sensitive. Argument commands take the first word after
//! the keyword; anything else on the line is ignored.

/// One parsed line of operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Show,
    Important,
    User(String),
    /// Criterion text, validated when the command runs.
    Sort(String),
    /// Date text, validated when the command runs.
    Date(String),
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);

        if let Some(arg) = argument(line, "user") {
            return Command::User(arg);
        }
        if let Some(arg) = argument(line, "sort") {
            return Command::Sort(arg);
        }
        if let Some(arg) = argument(line, "date") {
            return Command::Date(arg);
        }

        match line {
            "exit" => Command::Exit,
            "show" => Command::Show,
            "important" => Command::Important,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// First space-separated word after `keyword `, possibly empty.
fn argument(line: &str, keyword: &str) -> Option<String> {
    let rest = line.strip_prefix(keyword)?.strip_prefix(' ')?;
    Some(rest.split(' ').next().unwrap_or_default().to_string())
}
