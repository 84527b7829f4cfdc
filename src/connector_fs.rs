use anyhow::{bail, Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::models::SourceFile;

/// Collect every file under the scan root with the configured extension.
///
/// Files come back sorted by relative path so extraction order is stable
/// between runs. Files that are not valid UTF-8 are skipped.
pub fn collect_sources(config: &ScanConfig) -> Result<Vec<SourceFile>> {
    let root = &config.root;
    if !root.exists() {
        bail!("Scan root does not exist: {}", root.display());
    }

    let include_set = build_globset(&config.include_globs)?;
    let exclude_set = build_globset(&config.excludes())?;

    let mut files = Vec::new();

    let walker = WalkDir::new(root).follow_links(config.follow_symlinks);
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !has_extension(path, &config.extension) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative.to_string_lossy().to_string();

        if exclude_set.is_match(&rel_str) {
            continue;
        }
        if !config.include_globs.is_empty() && !include_set.is_match(&rel_str) {
            continue;
        }

        match read_source(path) {
            Ok(file) => files.push((rel_str, file)),
            Err(e) => warn!(path = %path.display(), "skipping unreadable file: {:#}", e),
        }
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    debug!(root = %root.display(), count = files.len(), "collected source files");

    Ok(files.into_iter().map(|(_, file)| file).collect())
}

fn read_source(path: &Path) -> Result<SourceFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(SourceFile {
        path: path.to_path_buf(),
        file_name,
        content,
    })
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).with_context(|| format!("Invalid glob: {}", pattern))?);
    }
    Ok(builder.build()?)
}
