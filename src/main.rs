use clap::Parser;
use tracing::{error, info, Instrument};

use inventory_service::app_system::{setup_tracing, InventoryConfig, InventorySystem, LoggingConfig};
use inventory_service::domain::{ProductDraft, ProductUpdate};
use inventory_service::query::{PageRequest, ProductFilter, ProductQuery, SortKey, SortOrder};

/// In-memory inventory service demo.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    logging: LoggingConfig,

    #[command(flatten)]
    inventory: InventoryConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup tracing once for the entire application
    setup_tracing(&cli.logging)?;

    info!("Starting inventory service");

    let system = InventorySystem::start(&cli.inventory).await?;
    let client = system.product_client.clone();

    let span = tracing::info_span!("product_creation");
    let product = async {
        info!("Adding a product");
        let draft = ProductDraft::new("Monitor", "Electronics", 180.0, 3);
        client.add_product(draft).await
    }
    .instrument(span)
    .await?;

    info!(product_id = product.id, "Product added");

    let span = tracing::info_span!("listing");
    let listing = async {
        let query = ProductQuery::default()
            .filtered(ProductFilter::default().in_stock(true))
            .sorted(SortKey::from_param(Some("price")), SortOrder::from_param(Some("desc")))
            .paged(PageRequest::new(0, 5)?);
        client.query_products(query).await
    }
    .instrument(span)
    .await?;

    info!(
        total_products = listing.total_products,
        total_pages = listing.total_pages,
        total_stock = listing.total_stock,
        total_value = listing.total_value,
        "In-stock listing"
    );
    for (category, stock) in &listing.category_stock {
        let value = listing.category_value.get(category).copied().unwrap_or_default();
        info!(%category, stock, value, "Category totals");
    }
    for product in &listing.products {
        info!(id = product.id, name = %product.name, price = product.unit_price, "Listed");
    }

    let update = ProductUpdate::from(ProductDraft::new("Monitor 27\"", "Electronics", 210.0, 3));
    if !client.update_product(product.id, update).await? {
        error!(product_id = product.id, "Product vanished before update");
    }
    if client.mark_out_of_stock(product.id).await? {
        info!(product_id = product.id, "Product marked out of stock");
    } else {
        error!(product_id = product.id, "Product not found when marking out of stock");
    }
    if client.restore_stock(product.id).await? {
        info!(product_id = product.id, "Product stock restored");
    } else {
        error!(product_id = product.id, "Product not found when restoring stock");
    }

    match client.delete_product(product.id).await {
        Ok(true) => info!(product_id = product.id, "Product deleted"),
        Ok(false) => error!(product_id = product.id, "Product not found"),
        Err(e) => error!(error = %e, "Delete failed"),
    }

    // Shutdown system gracefully
    drop(client);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
