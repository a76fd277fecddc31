//! # Inventory Service
//!
//! An in-memory product inventory behind a single-writer actor.
//!
//! - **Domain types** - [`Product`](domain::Product) plus the add and update payloads.
//! - **Query pipeline** - filter → sort → aggregate → paginate, see [`query`].
//! - **Actor framework** - a generic [`ResourceActor`](actor_framework::ResourceActor)
//!   owning the ordered collection, reached through a cloneable
//!   [`ResourceClient`](actor_framework::ResourceClient).
//! - **Product client** - [`ProductClient`](clients::ProductClient), the surface an
//!   API layer calls.
//! - **System** - [`InventorySystem`](app_system::InventorySystem) for startup,
//!   seeding and shutdown, and [`setup_tracing`](app_system::setup_tracing).
//!
//! ## Example Usage
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use inventory_service::app_system::{InventoryConfig, InventorySystem};
//! use inventory_service::query::{ProductFilter, ProductQuery};
//!
//! let system = InventorySystem::start(&InventoryConfig::default()).await?;
//!
//! let query = ProductQuery::default().filtered(ProductFilter::default().in_stock(true));
//! let page = system.product_client.query_products(query).await?;
//! println!("{} products in stock", page.total_products);
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod product_actor;
pub mod query;
pub mod seed;

#[cfg(test)]
mod mock_framework;
