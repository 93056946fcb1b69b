use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn, Instrument};

use super::client::BackendClient;
use super::messages::BackendRequest;
use super::store::OrderStore;

/// Service task owning the backend store.
///
/// Every request is answered from its own spawned task, so a slow listing read
/// never holds up a scanner lookup or update.
pub struct BackendService {
    receiver: mpsc::Receiver<BackendRequest>,
    store: Arc<dyn OrderStore>,
}

impl BackendService {
    pub fn new(buffer_size: usize, store: Arc<dyn OrderStore>) -> (Self, BackendClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, store };
        (service, BackendClient::new(sender))
    }

    #[instrument(name = "backend_service", skip(self))]
    pub async fn run(mut self) {
        info!("BackendService starting");
        while let Some(msg) = self.receiver.recv().await {
            let store = Arc::clone(&self.store);
            tokio::spawn(Self::handle(store, msg).in_current_span());
        }
        info!("BackendService stopped");
    }

    async fn handle(store: Arc<dyn OrderStore>, msg: BackendRequest) {
        match msg {
            BackendRequest::FetchOrder { table, id, respond_to } => {
                debug!(%table, order_id = %id, "Processing fetch_order request");
                let result = store.fetch_by_id(&table, &id).await;
                match &result {
                    Ok(Some(_)) => info!(order_id = %id, "Order found"),
                    Ok(None) => debug!(order_id = %id, "Order not found"),
                    Err(e) => warn!(order_id = %id, error = %e, "Order fetch failed"),
                }
                let _ = respond_to.send(result);
            }
            BackendRequest::ListCreatedBetween { table, from, to, respond_to } => {
                debug!(%table, %from, %to, "Processing list_created_between request");
                let result = store.list_created_between(&table, &from, &to).await;
                if let Ok(rows) = &result {
                    info!(row_count = rows.len(), "Orders listed");
                }
                let _ = respond_to.send(result);
            }
            BackendRequest::UpdateStatus { table, id, patch, respond_to } => {
                debug!(
                    %table,
                    order_id = %id,
                    status = %patch.status,
                    "Processing update_status request"
                );
                let result = store.update_status(&table, &id, &patch).await;
                match &result {
                    Ok(()) => info!(order_id = %id, "Order status updated"),
                    Err(e) => warn!(order_id = %id, error = %e, "Order status update failed"),
                }
                let _ = respond_to.send(result);
            }
        }
    }
}
