use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("Git error: {0}")]
    GitError(#[from] git2::Error),

    #[error("Invalid date '{0}', expected dd/mm/yyyy")]
    InvalidDate(String),

    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange { from: String, to: String },

    #[error("Revision {0} has no predecessor")]
    NoPredecessor(String),

    #[error("Invalid commit timestamp for revision {0}")]
    InvalidTimestamp(String),
}
