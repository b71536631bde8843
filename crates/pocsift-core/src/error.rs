use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown sort policy: {0}")]
    UnknownSortPolicy(String),
    #[error("missing value token cannot be blank: {0:?}")]
    BlankMissingValue(String),
}
