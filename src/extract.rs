//! Annotation extraction.
//!
//! Scans file content for `// TODO ` markers and captures the rest of each
//! marked line. Scanning is a cursor loop: after every match the search
//! resumes where the previous capture ended, so matches never overlap.

use tracing::debug;

use crate::models::{RawAnnotation, SourceFile};

/// Marker that opens an annotation, including the single trailing space.
pub const MARKER: &str = "// TODO ";

/// Extract annotations from every file, in file order then in-file order.
pub fn extract_annotations(files: &[SourceFile]) -> Vec<RawAnnotation> {
    let mut annotations = Vec::new();
    for file in files {
        let before = annotations.len();
        annotations.extend(
            scan_content(&file.content).map(|text| RawAnnotation {
                file_name: file.file_name.clone(),
                raw_text: text.to_string(),
            }),
        );
        debug!(
            file = %file.path.display(),
            found = annotations.len() - before,
            "scanned file"
        );
    }
    annotations
}

/// Iterate over the annotation texts in `content`, left to right.
pub fn scan_content(content: &str) -> AnnotationScanner<'_> {
    AnnotationScanner { content, cursor: 0 }
}

/// Stateful scanner returned by [`scan_content`].
pub struct AnnotationScanner<'a> {
    content: &'a str,
    cursor: usize,
}

impl<'a> Iterator for AnnotationScanner<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while self.cursor < self.content.len() {
            let found = self.content[self.cursor..].find(MARKER)?;
            let marker_start = self.cursor + found;
            let text_start = marker_start + MARKER.len();
            let rest = &self.content[text_start..];
            let text_len = rest.find(is_line_terminator).unwrap_or(rest.len());

            if text_len == 0 {
                // A bare marker captures nothing; retry just past its first byte.
                self.cursor = marker_start + 1;
                continue;
            }

            self.cursor = text_start + text_len;
            return Some(&rest[..text_len]);
        }
        None
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
