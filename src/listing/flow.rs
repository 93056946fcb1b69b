use chrono::{DateTime, Utc};
use tracing::{error, info, instrument};

use crate::app_system::AppContext;
use crate::domain::Order;
use super::table::TableBody;

/// Inclusive UTC bounds of the day containing `now`.
pub fn today_bounds(now: DateTime<Utc>) -> (String, String) {
    let day = now.format("%Y-%m-%d");
    (format!("{}T00:00:00Z", day), format!("{}T23:59:59Z", day))
}

/// Orders created on the UTC day of `now`. Backend errors are logged and
/// yield an empty list.
#[instrument(skip(ctx))]
pub async fn fetch_orders_today(ctx: &AppContext, now: DateTime<Utc>) -> Vec<Order> {
    let (from, to) = today_bounds(now);
    match ctx
        .backend
        .list_created_between(&ctx.tables.listing, &from, &to)
        .await
    {
        Ok(orders) => {
            info!(order_count = orders.len(), "Fetched today's orders");
            orders
        }
        Err(e) => {
            error!(error = %e, "Error fetching orders");
            Vec::new()
        }
    }
}

/// Fetches today's orders and renders them as table rows.
pub async fn render_orders_today(ctx: &AppContext, now: DateTime<Utc>) -> TableBody {
    let orders = fetch_orders_today(ctx, now).await;
    TableBody::render(&orders, ctx.display_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_bounds() {
        let now: DateTime<Utc> = "2024-01-15T17:42:03Z".parse().unwrap();
        assert_eq!(
            today_bounds(now),
            ("2024-01-15T00:00:00Z".to_string(), "2024-01-15T23:59:59Z".to_string())
        );

        let midnight: DateTime<Utc> = "2024-02-29T00:00:00Z".parse().unwrap();
        assert_eq!(today_bounds(midnight).0, "2024-02-29T00:00:00Z");
    }
}
