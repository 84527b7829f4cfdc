//! Startup pipeline: collect files, extract annotations, parse records.
//!
//! Runs once, sequentially, before the first command is accepted. The
//! returned [`TodoSet`] is the only state the command loop ever reads.

use anyhow::Result;
use tracing::info;

use crate::config::ScanConfig;
use crate::connector_fs::collect_sources;
use crate::extract::extract_annotations;
use crate::query::TodoSet;

pub fn scan_project(config: &ScanConfig) -> Result<TodoSet> {
    config.validate()?;

    let files = collect_sources(config)?;
    let annotations = extract_annotations(&files);
    let todos = TodoSet::from_annotations(&annotations);

    info!(
        root = %config.root.display(),
        extension = %config.extension,
        files = files.len(),
        todos = todos.len(),
        "scan complete"
    );

    Ok(todos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_project() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("lib")).unwrap();
        fs::write(
            tmp.path().join("app.js"),
            "// TODO alice; 2024-03-01; refactor parser!\nrun();\n",
        )
        .unwrap();
        fs::write(
            tmp.path().join("lib/util.js"),
            "// TODO bob; 2024-01-01; add tests\n",
        )
        .unwrap();

        let todos = scan_project(&ScanConfig::new(tmp.path())).unwrap();
        assert_eq!(todos.len(), 2);
        let first = &todos.records()[0];
        assert_eq!(first.user, "alice");
        assert_eq!(first.file_name, "app.js");
        assert_eq!(todos.records()[1].file_name, "util.js");
    }

    #[test]
    fn test_scan_project_without_annotations() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("plain.js"), "let x = 1;\n").unwrap();
        let todos = scan_project(&ScanConfig::new(tmp.path())).unwrap();
        assert!(todos.is_empty());
    }
}
