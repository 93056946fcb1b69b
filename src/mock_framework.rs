//! # Mock Framework
//!
//! Utilities for testing flows without a backend.
//!
//! Use [`create_mock_context`] to get an [`AppContext`] whose backend handle
//! talks to a receiver you control, then use [`expect_fetch`],
//! [`expect_list`] or [`expect_update`] to assert the request and answer it.

use chrono::FixedOffset;
use tokio::sync::mpsc;

use crate::app_system::AppContext;
use crate::backend::{BackendClient, BackendRequest, Response};
use crate::config::TableNames;
use crate::domain::{Order, StatusPatch};

/// Creates a mock client and the receiver its requests arrive on.
pub fn create_mock_client(buffer_size: usize) -> (BackendClient, mpsc::Receiver<BackendRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (BackendClient::new(sender), receiver)
}

/// Context with default table names, UTC display, and a mock backend.
pub fn create_mock_context() -> (AppContext, mpsc::Receiver<BackendRequest>) {
    let (backend, receiver) = create_mock_client(10);
    let ctx = AppContext {
        backend,
        tables: TableNames::default(),
        display_offset: FixedOffset::east_opt(0).expect("zero offset is valid"),
    };
    (ctx, receiver)
}

/// Next request must be a FetchOrder; returns `(table, id, responder)`.
pub async fn expect_fetch(
    receiver: &mut mpsc::Receiver<BackendRequest>,
) -> Option<(String, String, Response<Option<Order>>)> {
    match receiver.recv().await {
        Some(BackendRequest::FetchOrder { table, id, respond_to }) => Some((table, id, respond_to)),
        _ => None,
    }
}

/// Next request must be a ListCreatedBetween; returns `(table, from, to, responder)`.
pub async fn expect_list(
    receiver: &mut mpsc::Receiver<BackendRequest>,
) -> Option<(String, String, String, Response<Vec<Order>>)> {
    match receiver.recv().await {
        Some(BackendRequest::ListCreatedBetween { table, from, to, respond_to }) => {
            Some((table, from, to, respond_to))
        }
        _ => None,
    }
}

/// Next request must be an UpdateStatus; returns `(table, id, patch, responder)`.
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<BackendRequest>,
) -> Option<(String, String, StatusPatch, Response<()>)> {
    match receiver.recv().await {
        Some(BackendRequest::UpdateStatus { table, id, patch, respond_to }) => {
            Some((table, id, patch, respond_to))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let fetch_task = tokio::spawn(async move { client.fetch_order("ordersx", "1").await });

        let (table, id, responder) = expect_fetch(&mut receiver).await.expect("Expected FetchOrder request");
        assert_eq!(table, "ordersx");
        assert_eq!(id, "1");
        responder.send(Ok(None)).unwrap();

        let result = fetch_task.await.unwrap();
        assert_eq!(result, Ok(None));
    }
}
