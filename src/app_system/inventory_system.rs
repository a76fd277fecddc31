use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{error, info, instrument};

use crate::actor_framework::ResourceActor;
use crate::clients::ProductClient;
use crate::domain::Product;
use crate::seed::demo_catalog;
use super::config::InventoryConfig;
use super::error::SystemError;

/// The inventory service: one product actor and the client that reaches it.
///
/// Responsible for starting the actor, seeding it, and handling shutdown.
pub struct InventorySystem {
    pub product_client: ProductClient,
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// Starts the system with the local calendar date as its clock.
    pub async fn start(config: &InventoryConfig) -> Result<Self, SystemError> {
        Self::start_with_clock(config, || Local::now().date_naive()).await
    }

    #[instrument(name = "inventory_system", skip(clock))]
    pub async fn start_with_clock(
        config: &InventoryConfig,
        clock: impl Fn() -> NaiveDate + Send + Sync + 'static,
    ) -> Result<Self, SystemError> {
        info!("Starting inventory system");

        let product_id_counter = Arc::new(AtomicU64::new(1));
        let next_product_id = move || product_id_counter.fetch_add(1, Ordering::SeqCst);

        let (product_actor, product_resource_client) =
            ResourceActor::<Product>::new(config.channel_capacity, next_product_id, clock);
        let product_client = ProductClient::new(product_resource_client);
        let handle = tokio::spawn(product_actor.run());

        let system = Self { product_client, handle };

        if config.seed {
            let catalog = demo_catalog();
            let count = catalog.len();
            for draft in catalog {
                system.product_client.add_product(draft).await?;
            }
            info!(count, "Demo catalog seeded");
        }

        Ok(system)
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        // The actor stops once every client is gone. Clones handed out to
        // callers must be dropped first or this waits on them.
        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Actor task failed");
            return Err(e.into());
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
