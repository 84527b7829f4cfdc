//! Core data models used throughout the TODO harness.
//!
//! These types represent the files, raw annotations, and parsed records that
//! flow through the collect → extract → parse pipeline.

use std::path::PathBuf;

use serde::Serialize;

use crate::fields;

/// A file produced by the source collector before extraction.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Base name of `path`, directory stripped.
    pub file_name: String,
    pub content: String,
}

/// One `// TODO ` line as found in a file, before field parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnnotation {
    pub file_name: String,
    pub raw_text: String,
}

/// Parsed, queryable view of a [`RawAnnotation`].
///
/// Every field is derived from `raw_text` alone, so a record can always be
/// rebuilt from the annotation it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationRecord {
    pub user: String,
    pub date: String,
    pub comment: String,
    pub importance: bool,
    pub importance_rank: usize,
    pub file_name: String,
    pub raw_text: String,
}

impl AnnotationRecord {
    pub fn from_raw(raw: &RawAnnotation) -> Self {
        let parsed = fields::parse_fields(&raw.raw_text);
        Self {
            user: parsed.user,
            date: parsed.date,
            comment: parsed.comment,
            importance: parsed.importance,
            importance_rank: parsed.importance_rank,
            file_name: raw.file_name.clone(),
            raw_text: raw.raw_text.clone(),
        }
    }
}
