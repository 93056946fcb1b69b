use std::sync::Arc;

use chrono::FixedOffset;
use tracing::{error, info};

use crate::backend::{BackendClient, BackendService, OrderStore, PostgrestStore};
use crate::config::{AppConfig, TableNames};

/// Everything a flow needs, built once at startup and passed in explicitly.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub backend: BackendClient,
    pub tables: TableNames,
    pub display_offset: FixedOffset,
}

/// Starts the backend service and hands out the shared context.
pub struct KioskSystem {
    context: AppContext,
    handle: tokio::task::JoinHandle<()>,
}

impl KioskSystem {
    /// Wires the system against the hosted backend described by `config`.
    pub fn new(config: &AppConfig) -> Self {
        info!(
            backend = %config.backend_url,
            scan_table = %config.tables.scan,
            listing_table = %config.tables.listing,
            "Starting kiosk system"
        );
        let store = PostgrestStore::new(&config.backend_url, config.api_key.clone());
        Self::with_store(Arc::new(store), config.tables.clone(), config.display_offset)
    }

    pub fn with_store(
        store: Arc<dyn OrderStore>,
        tables: TableNames,
        display_offset: FixedOffset,
    ) -> Self {
        let (service, backend) = BackendService::new(32, store);
        let handle = tokio::spawn(service.run());
        Self {
            context: AppContext {
                backend,
                tables,
                display_offset,
            },
            handle,
        }
    }

    pub fn context(&self) -> AppContext {
        self.context.clone()
    }

    /// Drops the system's backend handle and waits for the service to drain.
    /// Contexts handed out earlier must be dropped first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down kiosk system...");
        drop(self.context);

        if let Err(e) = self.handle.await {
            error!("Backend service task failed: {:?}", e);
            return Err(format!("Backend service task failed: {:?}", e));
        }

        info!("Kiosk system shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;
    use crate::domain::Order;
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn test_system_lifecycle() {
        let store = Arc::new(MemoryStore::new());
        let created_at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        store
            .insert("ordersx", Order::new("1", "Mie", "1", "Air", "Pending", created_at))
            .await;

        let system = KioskSystem::with_store(store, TableNames::default(), FixedOffset::east_opt(0).unwrap());
        {
            let ctx = system.context();
            let order = ctx.backend.fetch_order(&ctx.tables.scan, "1").await.unwrap();
            assert!(order.is_some());
        }
        system.shutdown().await.unwrap();
    }
}
