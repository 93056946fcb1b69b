use async_trait::async_trait;

use crate::domain::{Order, StatusPatch};
use super::error::BackendError;

#[cfg(test)]
pub use memory::MemoryStore;

/// Remote table operations the kiosk needs, implemented over HTTP by
/// [`PostgrestStore`](super::PostgrestStore).
#[async_trait]
pub trait OrderStore: Send + Sync + 'static {
    /// Equality read on `id`. Zero rows is `Ok(None)`.
    async fn fetch_by_id(&self, table: &str, id: &str) -> Result<Option<Order>, BackendError>;

    /// Rows whose `created_at` lies in the inclusive range `[from, to]`.
    async fn list_created_between(
        &self,
        table: &str,
        from: &str,
        to: &str,
    ) -> Result<Vec<Order>, BackendError>;

    async fn update_status(
        &self,
        table: &str,
        id: &str,
        patch: &StatusPatch,
    ) -> Result<(), BackendError>;
}
