use thiserror::Error;

use crate::product_actor::ProductError;

/// Errors raised while starting or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Tracing setup failed: {0}")]
    Tracing(String),
    #[error("Seeding the catalog failed: {0}")]
    Seed(#[from] ProductError),
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}
