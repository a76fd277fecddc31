//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to assert behavior.

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest, Response};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends to a channel the test controls, so the test plays the
/// actor: it inspects each request and answers it (success, not found, or
/// failure) deterministically.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreateParams, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Patch, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Response<bool>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Action, Response<Option<T::ActionResult>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Query request
pub async fn expect_query<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Query, Response<T::QueryResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Query { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::FrameworkError;
    use crate::clients::ProductClient;
    use crate::domain::{Product, ProductDraft, ProductUpdate};
    use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
    use crate::query::{ProductFilter, ProductQuery, SortKey, SortOrder};

    #[tokio::test]
    async fn test_query_is_forwarded_unchanged() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        let query = ProductQuery::default()
            .filtered(ProductFilter::default().category("Food"))
            .sorted(SortKey::Expiration, SortOrder::Desc);
        let sent = query.clone();
        let task = tokio::spawn(async move { client.query_products(sent).await });

        let (received, responder) = expect_query(&mut receiver).await.expect("Expected Query request");
        assert_eq!(received, query);
        drop(responder);

        let result = task.await.unwrap();
        assert!(matches!(result, Err(ProductError::ActorCommunicationError(_))));
    }

    #[tokio::test]
    async fn test_unknown_id_maps_to_false() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        let task = tokio::spawn(async move {
            let restored = client.restore_stock(42).await;
            let updated = client
                .update_product(42, ProductUpdate::from(ProductDraft::new("Hat", "Clothing", 14.0, 6)))
                .await;
            let deleted = client.delete_product(42).await;
            (restored, updated, deleted)
        });

        let (id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, 42);
        assert_eq!(action, ProductAction::RestoreStock);
        responder.send(Ok(None)).unwrap();

        let (id, patch, responder) = expect_update(&mut receiver).await.expect("Expected Update request");
        assert_eq!(id, 42);
        assert_eq!(patch.name, "Hat");
        responder.send(Ok(None)).unwrap();

        let (id, responder) = expect_delete(&mut receiver).await.expect("Expected Delete request");
        assert_eq!(id, 42);
        responder.send(Ok(false)).unwrap();

        let (restored, updated, deleted) = task.await.unwrap();
        assert_eq!(restored, Ok(false));
        assert_eq!(updated, Ok(false));
        assert_eq!(deleted, Ok(false));
    }

    #[tokio::test]
    async fn test_found_id_maps_to_true() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        let task = tokio::spawn(async move { client.mark_out_of_stock(7).await });

        let (id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!((id, action), (7, ProductAction::MarkOutOfStock));
        responder.send(Ok(Some(ProductActionResult::MarkedOutOfStock))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(true));
    }

    #[tokio::test]
    async fn test_rejection_maps_to_invalid_argument() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        let task = tokio::spawn(async move {
            client.add_product(ProductDraft::new("Refund", "Misc", -1.0, 1)).await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.name, "Refund");
        responder.send(Err(FrameworkError::Rejected("negative price".to_string()))).unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(ProductError::InvalidArgument("negative price".to_string()))
        );
    }
}
