//! Field parser for annotation text.
//!
//! An annotation body has the loose shape `user; YYYY-MM-DD; comment`. Any
//! part may be missing, in which case the parser degrades to empty fields
//! and keeps the whole text as the comment. Parsing is done by hand rather
//! than with a regex so each field rule can be tested on its own.

use chrono::NaiveDate;

/// Length in bytes of a `YYYY-MM-DD` token.
const DATE_TOKEN_LEN: usize = 10;

/// Fields derived from one annotation's raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields {
    pub user: String,
    pub date: String,
    pub comment: String,
    pub importance: bool,
    pub importance_rank: usize,
}

/// Derive every field of `raw`. Pure and deterministic.
pub fn parse_fields(raw: &str) -> Fields {
    let importance_rank = importance_rank(raw);
    Fields {
        user: parse_user(raw).to_string(),
        date: parse_date(raw).to_string(),
        comment: parse_comment(raw).to_string(),
        importance: importance_rank > 0,
        importance_rank,
    }
}

/// Text before the first `;`. Empty when there is no `;` or nothing precedes it.
pub fn parse_user(raw: &str) -> &str {
    match raw.find(';') {
        Some(end) if end > 0 => &raw[..end],
        _ => "",
    }
}

/// First `YYYY-MM-DD` token that follows a `;` and optional whitespace.
pub fn parse_date(raw: &str) -> &str {
    raw.match_indices(';')
        .find_map(|(pos, _)| date_token(raw[pos + 1..].trim_start()))
        .unwrap_or("")
}

/// Free text after the last `; YYYY-MM-DD ;` group.
///
/// Leading whitespace of the tail is dropped. Falls back to the full raw
/// text when no such group exists or only whitespace follows it, so
/// `"frank; 2024-05-05;   "` keeps its raw text as the comment.
pub fn parse_comment(raw: &str) -> &str {
    let mut cursor = 0;
    let mut tail_start = None;

    while let Some(offset) = raw[cursor..].find(';') {
        let start = cursor + offset;
        match user_date_group_len(&raw[start..]) {
            Some(len) => {
                cursor = start + len;
                tail_start = Some(cursor);
            }
            None => cursor = start + 1,
        }
    }

    match tail_start.map(|start| raw[start..].trim_start()) {
        Some(tail) if !tail.is_empty() => tail,
        _ => raw,
    }
}

/// Number of `!` characters; zero means the annotation is not important.
pub fn importance_rank(raw: &str) -> usize {
    raw.matches('!').count()
}

/// Parse a record's date token as a calendar date.
///
/// Tokens that have the right shape but name no real day (`2024-13-40`)
/// yield `None`.
pub fn calendar_date(token: &str) -> Option<NaiveDate> {
    if token.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(token, "%Y-%m-%d").ok()
}

/// `s` must start with `DDDD-DD-DD` (ASCII digits).
fn date_token(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    if bytes.len() < DATE_TOKEN_LEN {
        return None;
    }
    let shaped = bytes[..DATE_TOKEN_LEN]
        .iter()
        .enumerate()
        .all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    shaped.then(|| &s[..DATE_TOKEN_LEN])
}

/// Byte length of a `;<ws>*YYYY-MM-DD<ws>*;` group at the start of `s`.
fn user_date_group_len(s: &str) -> Option<usize> {
    let body = s.strip_prefix(';')?.trim_start();
    let token = date_token(body)?;
    let rest = body[token.len()..].trim_start().strip_prefix(';')?;
    Some(s.len() - rest.len())
}
