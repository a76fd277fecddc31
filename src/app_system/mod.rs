//! System orchestration, startup, and shutdown logic.

pub mod config;
pub mod error;
pub mod inventory_system;
pub mod tracing;

pub use config::*;
pub use error::*;
pub use inventory_system::*;
pub use self::tracing::*;
