use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::query::QueryError;

/// Errors that can occur during product operations.
///
/// A missing product is not an error: lookups answer `None` and mutations
/// answer `false`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::Rejected(reason) => Self::InvalidArgument(reason),
            other => Self::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<QueryError> for ProductError {
    fn from(error: QueryError) -> Self {
        match error {
            QueryError::InvalidArgument(reason) => Self::InvalidArgument(reason),
        }
    }
}
