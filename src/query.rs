//! Immutable record set and the queries that run over it.
//!
//! [`TodoSet`] is built once at startup and never changes afterwards. Every
//! query borrows it and returns a fresh view (`Vec<&AnnotationRecord>`), so
//! filtering or sorting one view has no effect on the next command.

use std::cmp::{Ordering, Reverse};
use std::str::FromStr;

use chrono::NaiveDate;
use feruca::Collator;

use crate::error::{QueryError, Result};
use crate::fields::calendar_date;
use crate::models::{AnnotationRecord, RawAnnotation};

/// Ordered, borrowed result of a query.
pub type View<'a> = Vec<&'a AnnotationRecord>;

/// Key accepted by the `sort` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    /// Most `!` first.
    Importance,
    /// Alphabetical, records without a user last.
    User,
    /// Newest first, records without a date last.
    Date,
}

impl FromStr for SortCriterion {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "importance" => Ok(SortCriterion::Importance),
            "user" => Ok(SortCriterion::User),
            "date" => Ok(SortCriterion::Date),
            other => Err(QueryError::UnknownSortCriterion(other.to_string())),
        }
    }
}

/// All parsed annotations of one scan, in extraction order.
#[derive(Debug, Clone, Default)]
pub struct TodoSet {
    records: Vec<AnnotationRecord>,
}

impl TodoSet {
    pub fn from_annotations(annotations: &[RawAnnotation]) -> Self {
        Self {
            records: annotations.iter().map(AnnotationRecord::from_raw).collect(),
        }
    }

    pub fn records(&self) -> &[AnnotationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record, extraction order.
    pub fn show(&self) -> View<'_> {
        self.records.iter().collect()
    }

    /// Records containing at least one `!`.
    pub fn important(&self) -> View<'_> {
        self.records.iter().filter(|r| r.importance).collect()
    }

    /// Records whose user is exactly `name`.
    pub fn by_user(&self, name: &str) -> Result<View<'_>> {
        let view: View<'_> = self
            .records
            .iter()
            .filter(|r| r.user == name)
            .collect();
        if view.is_empty() {
            return Err(QueryError::UserNotFound(name.to_string()));
        }
        Ok(view)
    }

    /// A stably sorted copy of the whole set.
    pub fn sorted(&self, criterion: SortCriterion) -> View<'_> {
        let mut view = self.show();
        match criterion {
            SortCriterion::Importance => view.sort_by_key(|r| Reverse(r.importance_rank)),
            SortCriterion::User => {
                let mut collator = Collator::default();
                view.sort_by(|a, b| compare_users(&mut collator, &a.user, &b.user));
            }
            // `None < Some(_)`, so reversing puts undated records last.
            SortCriterion::Date => view.sort_by_key(|r| Reverse(calendar_date(&r.date))),
        }
        view
    }

    /// Records dated strictly after `date`. Undated records never match.
    pub fn after(&self, date: NaiveDate) -> View<'_> {
        self.records
            .iter()
            .filter(|r| calendar_date(&r.date).is_some_and(|d| d > date))
            .collect()
    }

    /// [`TodoSet::after`] with the date given as operator text.
    pub fn after_str(&self, input: &str) -> Result<View<'_>> {
        let date = parse_query_date(input)?;
        Ok(self.after(date))
    }
}

/// Parse `YYYY`, `YYYY-MM` or `YYYY-MM-DD`; missing parts default to 1.
pub fn parse_query_date(input: &str) -> Result<NaiveDate> {
    let invalid = || QueryError::InvalidDate(input.to_string());

    let parts: Vec<&str> = input.split('-').collect();
    if parts.len() > 3 {
        return Err(invalid());
    }

    let mut ymd = [1u32; 3];
    for ((part, width), slot) in parts.iter().zip([4usize, 2, 2]).zip(ymd.iter_mut()) {
        if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *slot = part.parse().map_err(|_| invalid())?;
    }

    NaiveDate::from_ymd_opt(ymd[0] as i32, ymd[1], ymd[2]).ok_or_else(invalid)
}

/// Unicode collation order (CLDR root). An empty user sorts after every
/// named one.
fn compare_users(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => collator.collate(a, b),
    }
}
