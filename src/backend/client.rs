use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::domain::{Order, StatusPatch};
use super::error::BackendError;
use super::messages::BackendRequest;

/// Cheap, clonable handle to the [`BackendService`](super::BackendService).
#[derive(Debug, Clone)]
pub struct BackendClient {
    sender: mpsc::Sender<BackendRequest>,
}

fn closed(reason: &str) -> BackendError {
    BackendError::ServiceCommunicationError(reason.to_string())
}

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
macro_rules! client_method {
    (
        $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty
        as $variant:ident { $($field:ident: $value:expr),* }
    ) => {
        #[instrument(skip(self))]
        pub async fn $method(
            &self,
            $($param: $param_type),*
        ) -> Result<$return_type, BackendError> {
            debug!("Sending request");
            let (respond_to, response) = oneshot::channel();
            self.sender
                .send(BackendRequest::$variant {
                    $($field: $value,)*
                    respond_to,
                })
                .await
                .map_err(|_| closed("Service closed"))?;
            response
                .await
                .map_err(|_| closed("Service dropped"))?
        }
    };
}

impl BackendClient {
    pub fn new(sender: mpsc::Sender<BackendRequest>) -> Self {
        Self { sender }
    }

    client_method!(fetch_order(table: &str, id: &str) -> Option<Order> as FetchOrder {
        table: table.to_string(),
        id: id.to_string()
    });

    client_method!(list_created_between(table: &str, from: &str, to: &str) -> Vec<Order>
        as ListCreatedBetween {
        table: table.to_string(),
        from: from.to_string(),
        to: to.to_string()
    });

    client_method!(mark_done(table: &str, id: &str) -> () as UpdateStatus {
        table: table.to_string(),
        id: id.to_string(),
        patch: StatusPatch::done()
    });
}
