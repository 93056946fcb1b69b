//! Print today's orders as a table.

use chrono::Utc;
use tracing::{error, info};

use order_kiosk::app_system::{setup_tracing, KioskSystem};
use order_kiosk::config::AppConfig;
use order_kiosk::listing::render_orders_today;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AppConfig::load().map_err(|e| {
        error!(error = %e, "Startup configuration error");
        e.to_string()
    })?;

    let system = KioskSystem::new(&config);
    {
        let ctx = system.context();
        info!(table = %ctx.tables.listing, "Listing today's orders");
        let body = render_orders_today(&ctx, Utc::now()).await;
        print!("{}", body);
    }

    system.shutdown().await
}
