use tokio::sync::oneshot;

use crate::domain::{Order, StatusPatch};
use super::error::BackendError;

pub type Response<T> = oneshot::Sender<Result<T, BackendError>>;

/// Typed requests served by the backend service. Each carries the logical
/// table it targets and a oneshot channel for the reply.
#[derive(Debug)]
pub enum BackendRequest {
    FetchOrder {
        table: String,
        id: String,
        respond_to: Response<Option<Order>>,
    },
    ListCreatedBetween {
        table: String,
        from: String,
        to: String,
        respond_to: Response<Vec<Order>>,
    },
    UpdateStatus {
        table: String,
        id: String,
        patch: StatusPatch,
        respond_to: Response<()>,
    },
}
