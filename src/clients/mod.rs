//! Typed clients wrapping the generic [`ResourceClient`](crate::actor_framework::ResourceClient).

#[macro_use]
pub mod macros;
pub mod product_client;

pub use product_client::ProductClient;
