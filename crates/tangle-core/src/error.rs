use thiserror::Error;

pub type Result<T> = std::result::Result<T, TangleError>;

/// Every failure here is a caller programming error, surfaced before any
/// mutation takes place. Nothing is transient or retryable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TangleError {
    #[error("Entity '{0}' already exists")]
    EntityExists(String),

    #[error("Entity '{0}' does not exist")]
    EntityNotFound(String),

    #[error("Link type '{0}' is already registered")]
    LinkTypeExists(String),

    #[error("Link type '{0}' is not registered")]
    LinkTypeNotFound(String),
}
