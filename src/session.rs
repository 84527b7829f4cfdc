//! Interactive command loop.
//!
//! A [`Session`] owns the scanned [`TodoSet`] and answers one command at a
//! time: block for a line, run it to completion, write the reply, repeat.
//! [`Session::execute`] holds the dispatch logic and does no I/O, so the
//! loop itself stays a thin wrapper around any reader/writer pair.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::command::Command;
use crate::query::{SortCriterion, TodoSet, View};
use crate::table::render_table;

/// Line printed once before the first command is read.
pub const GREETING: &str = "Please, write your command!";
/// Reply to input that matches no command.
pub const WRONG_COMMAND: &str = "wrong command";

/// How record views are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Table,
    Json,
}

/// Result of executing one command.
#[derive(Debug)]
pub enum Reply<'a> {
    Rows(View<'a>),
    Message(String),
    Exit,
}

pub struct Session {
    todos: TodoSet,
    mode: OutputMode,
    prompt: bool,
}

impl Session {
    pub fn new(todos: TodoSet, mode: OutputMode) -> Self {
        Self {
            todos,
            mode,
            prompt: false,
        }
    }

    /// Print `> ` before each read. Meant for a terminal on stdin.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn execute(&self, command: &Command) -> Reply<'_> {
        let result = match command {
            Command::Exit => return Reply::Exit,
            Command::Show => Ok(self.todos.show()),
            Command::Important => Ok(self.todos.important()),
            Command::User(name) => self.todos.by_user(name),
            Command::Sort(criterion) => criterion
                .parse::<SortCriterion>()
                .map(|c| self.todos.sorted(c)),
            Command::Date(text) => self.todos.after_str(text),
            Command::Unknown(_) => return Reply::Message(WRONG_COMMAND.to_string()),
        };

        match result {
            Ok(view) => Reply::Rows(view),
            Err(e) => Reply::Message(e.to_string()),
        }
    }

    /// Interactive loop. Returns on `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, output: &mut W) -> Result<()> {
        writeln!(output, "{}", GREETING)?;

        let mut buf = Vec::new();
        loop {
            if self.prompt {
                write!(output, "> ")?;
            }
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                return Ok(());
            }

            // Undecodable bytes become U+FFFD and the line is answered like any other.
            let line = String::from_utf8_lossy(&buf);
            if !self.handle(&Command::parse(&line), output)? {
                return Ok(());
            }
        }
    }

    /// Run a fixed list of commands without prompting. Stops at `exit`.
    pub fn run_script<W: Write>(&self, commands: &[String], output: &mut W) -> Result<()> {
        for text in commands {
            if !self.handle(&Command::parse(text), output)? {
                break;
            }
        }
        output.flush()?;
        Ok(())
    }

    /// Execute and write the reply. `false` means the session should stop.
    fn handle<W: Write>(&self, command: &Command, output: &mut W) -> Result<bool> {
        debug!(?command, "executing");
        match self.execute(command) {
            Reply::Exit => return Ok(false),
            Reply::Message(text) => writeln!(output, "{}", text)?,
            Reply::Rows(view) => self.write_view(&view, output)?,
        }
        Ok(true)
    }

    fn write_view<W: Write>(&self, view: &View<'_>, output: &mut W) -> Result<()> {
        match self.mode {
            OutputMode::Table => output.write_all(render_table(view).as_bytes())?,
            OutputMode::Json => {
                let json = serde_json::to_string_pretty(view)?;
                writeln!(output, "{}", json)?;
            }
        }
        Ok(())
    }
}
