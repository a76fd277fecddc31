use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductDraft, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductError};
use crate::query::{ProductQuery, QueryResult};

/// Client for interacting with the Product actor.
///
/// Mutations answer `Ok(false)` when the id is unknown.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

crate::impl_basic_client!(ProductClient, Product, ProductId, ProductError, product);

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn query_products(&self, query: ProductQuery) -> Result<QueryResult, ProductError> {
        debug!("Sending request");
        let result = self.inner.query(query).await?;
        debug!(
            total_products = result.total_products,
            total_pages = result.total_pages,
            total_stock = result.total_stock,
            total_value = result.total_value,
            page_len = result.products.len(),
            "Query answered"
        );
        Ok(result)
    }

    #[instrument(skip(self))]
    pub async fn add_product(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        debug!("Sending request");
        let product = self.inner.create(draft).await?;
        info!(product_id = product.id, creation_date = %product.creation_date, "Product created");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn update_product(&self, id: ProductId, update: ProductUpdate) -> Result<bool, ProductError> {
        debug!("Sending request");
        Ok(self.inner.update(id, update).await?.is_some())
    }

    #[instrument(skip(self))]
    pub async fn mark_out_of_stock(&self, id: ProductId) -> Result<bool, ProductError> {
        debug!("Sending request");
        Ok(self.inner.perform_action(id, ProductAction::MarkOutOfStock).await?.is_some())
    }

    #[instrument(skip(self))]
    pub async fn restore_stock(&self, id: ProductId) -> Result<bool, ProductError> {
        debug!("Sending request");
        Ok(self.inner.perform_action(id, ProductAction::RestoreStock).await?.is_some())
    }
}
