//! Product-specific domain logic, including stock toggle actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
