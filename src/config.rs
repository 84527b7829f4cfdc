use anyhow::{bail, Result};
use std::path::PathBuf;

/// Extension scanned when none is given on the command line.
pub const DEFAULT_EXTENSION: &str = "js";

/// Directories never worth scanning for annotations.
pub const DEFAULT_EXCLUDES: [&str; 3] = ["**/.git/**", "**/target/**", "**/node_modules/**"];

/// Settings for one scan of a source tree.
///
/// There is no configuration file; the CLI builds this from its flags.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    /// File extension without the leading dot.
    pub extension: String,
    /// When non-empty, a file must also match one of these globs.
    pub include_globs: Vec<String>,
    /// Extra globs excluded on top of [`DEFAULT_EXCLUDES`].
    pub exclude_globs: Vec<String>,
    pub follow_symlinks: bool,
}

impl ScanConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            include_globs: Vec::new(),
            exclude_globs: Vec::new(),
            follow_symlinks: false,
        }
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// All exclude globs, defaults first.
    pub fn excludes(&self) -> Vec<String> {
        let mut excludes: Vec<String> = DEFAULT_EXCLUDES.iter().map(|g| g.to_string()).collect();
        excludes.extend(self.exclude_globs.iter().cloned());
        excludes
    }

    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            bail!("extension must not be empty");
        }
        if self.extension.contains(['/', '\\']) {
            bail!("extension must not contain a path separator: '{}'", self.extension);
        }
        if !self.root.is_dir() {
            bail!("scan root is not a directory: {}", self.root.display());
        }
        Ok(())
    }
}
