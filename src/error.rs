use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

/// Non-fatal failures of a single query. The `Display` text is what the
/// operator sees; the command loop keeps running after any of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown sort criterion: '{0}'. Use importance, user, or date")]
    UnknownSortCriterion(String),

    #[error("invalid date '{0}'. Use yyyy, yyyy-mm, or yyyy-mm-dd")]
    InvalidDate(String),

    #[error("no TODOs found for user: {0}")]
    UserNotFound(String),
}
