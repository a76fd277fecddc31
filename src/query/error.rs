use thiserror::Error;

/// Errors raised while building a query from caller input.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QueryError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
