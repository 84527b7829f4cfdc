//! # TODO Harness CLI (`todos`)
//!
//! Scans the current directory (or `--root`) for `// TODO` annotations in
//! files with the chosen extension, then answers query commands typed on
//! stdin until `exit` or end of input.
//!
//! ## Examples
//!
//! ```bash
//! # Interactive session over all .js files below the current directory
//! todos
//!
//! # Rust sources in another tree, skipping generated code
//! todos --root ../service --ext rs --exclude '**/generated/**'
//!
//! # One-shot queries, JSON output
//! todos --json -c important -c 'sort date'
//! ```

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use todo_harness::config::{ScanConfig, DEFAULT_EXTENSION};
use todo_harness::ingest::scan_project;
use todo_harness::session::{OutputMode, Session};

/// Scan source files for `// TODO user; YYYY-MM-DD; comment` annotations
/// and query them interactively.
#[derive(Parser)]
#[command(
    name = "todos",
    about = "Scan source files for TODO annotations and query them interactively",
    version,
    long_about = "Collects every `// TODO` line below the scan root, parses the optional \
    `user; YYYY-MM-DD; comment` fields, and answers the commands show, important, \
    user <name>, sort <importance|user|date>, date <yyyy[-mm[-dd]]> and exit."
)]
struct Cli {
    /// Directory to scan recursively. Defaults to the current directory.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// File extension to scan, without the dot.
    #[arg(long = "ext", default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Only scan files whose path relative to the root matches this glob.
    /// May be repeated.
    #[arg(long = "include")]
    include_globs: Vec<String>,

    /// Skip files matching this glob, in addition to .git, target and
    /// node_modules. May be repeated.
    #[arg(long = "exclude")]
    exclude_globs: Vec<String>,

    /// Follow symbolic links while walking the tree.
    #[arg(long)]
    follow_symlinks: bool,

    /// Print record lists as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Run this command and exit instead of reading stdin. May be repeated;
    /// commands run in order.
    #[arg(short = 'c', long = "command")]
    commands: Vec<String>,

    /// Log scan details to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Log errors only.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn scan_config(&self) -> ScanConfig {
        let mut config = ScanConfig::new(&self.root).with_extension(&self.extension);
        config.include_globs = self.include_globs.clone();
        config.exclude_globs = self.exclude_globs.clone();
        config.follow_symlinks = self.follow_symlinks;
        config
    }
}

fn init_logging(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let todos = scan_project(&cli.scan_config())?;

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Table
    };
    let session = Session::new(todos, mode);
    let mut stdout = io::stdout().lock();

    if !cli.commands.is_empty() {
        return session.run_script(&cli.commands, &mut stdout);
    }

    let session = session.with_prompt(atty::is(atty::Stream::Stdin));
    session.run(io::stdin().lock(), &mut stdout)
}
