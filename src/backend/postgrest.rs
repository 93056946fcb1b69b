use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, Response};
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::domain::{Order, StatusPatch};
use super::error::BackendError;
use super::store::OrderStore;

/// [`OrderStore`] backed by a hosted PostgREST endpoint (Supabase `/rest/v1`).
#[derive(Clone)]
pub struct PostgrestStore {
    http: Client,
    rest_root: String,
    api_key: String,
}

impl std::fmt::Debug for PostgrestStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgrestStore")
            .field("rest_root", &self.rest_root)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

impl PostgrestStore {
    pub fn new(base_url: &Url, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            rest_root: format!("{}/rest/v1", base_url.as_str().trim_end_matches('/')),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_root, table)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
    }

    async fn check(response: Response) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(api_error(status.as_u16(), &body))
    }
}

/// Query for an equality read on `id`.
pub(crate) fn id_filter(id: &str) -> Vec<(&'static str, String)> {
    vec![("select", "*".to_string()), ("id", format!("eq.{}", id))]
}

/// Query for an inclusive `created_at` range read.
pub(crate) fn created_between_filter(from: &str, to: &str) -> Vec<(&'static str, String)> {
    vec![
        ("select", "*".to_string()),
        ("created_at", format!("gte.{}", from)),
        ("created_at", format!("lte.{}", to)),
    ]
}

/// Reduces an equality read to at most one order. No rows means not found;
/// extra rows break the key contract, so the first one wins.
pub(crate) fn single_row(rows: Vec<Order>) -> Option<Order> {
    if rows.len() > 1 {
        warn!(rows = rows.len(), "Identifier matched more than one row, using the first");
    }
    rows.into_iter().next()
}

/// Builds the error for a non-2xx reply, preferring the backend's `message`.
pub(crate) fn api_error(status: u16, body: &str) -> BackendError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                body.trim().to_string()
            }
        });
    BackendError::Api { status, message }
}

#[async_trait]
impl OrderStore for PostgrestStore {
    #[instrument(skip(self))]
    async fn fetch_by_id(&self, table: &str, id: &str) -> Result<Option<Order>, BackendError> {
        debug!("Sending request");
        let request = self.http.get(self.table_url(table)).query(&id_filter(id));
        let response = Self::check(self.authorized(request).send().await?).await?;
        let rows: Vec<Order> = response.json().await?;
        Ok(single_row(rows))
    }

    #[instrument(skip(self))]
    async fn list_created_between(
        &self,
        table: &str,
        from: &str,
        to: &str,
    ) -> Result<Vec<Order>, BackendError> {
        debug!("Sending request");
        let request = self
            .http
            .get(self.table_url(table))
            .query(&created_between_filter(from, to));
        let response = Self::check(self.authorized(request).send().await?).await?;
        Ok(response.json().await?)
    }

    #[instrument(skip(self, patch))]
    async fn update_status(
        &self,
        table: &str,
        id: &str,
        patch: &StatusPatch,
    ) -> Result<(), BackendError> {
        debug!(status = %patch.status, "Sending request");
        let request = self
            .http
            .patch(self.table_url(table))
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=minimal")
            .json(patch);
        Self::check(self.authorized(request).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn order(id: &str) -> Order {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        Order::new(id, "Mie", "3", "Es Teh", "Pending", created_at)
    }

    #[test]
    fn test_single_row_selection() {
        assert_eq!(single_row(Vec::new()), None);
        assert_eq!(single_row(vec![order("109")]), Some(order("109")));

        let picked = single_row(vec![order("109"), order("110")]).unwrap();
        assert_eq!(picked.id, "109");
    }

    #[test]
    fn test_requests_carry_api_key() {
        let base = Url::parse("https://abc.supabase.co").unwrap();
        let store = PostgrestStore::new(&base, "anon-key");
        let request = store
            .authorized(store.http.get(store.table_url("ordersx")).query(&id_filter("109")))
            .build()
            .unwrap();

        assert_eq!(request.headers()["apikey"], "anon-key");
        assert_eq!(request.headers()[header::AUTHORIZATION], "Bearer anon-key");
        assert_eq!(
            request.url().as_str(),
            "https://abc.supabase.co/rest/v1/ordersx?select=*&id=eq.109"
        );
    }

    #[test]
    fn test_table_url_ignores_trailing_slash() {
        let base = Url::parse("https://abc.supabase.co/").unwrap();
        let store = PostgrestStore::new(&base, "key");
        assert_eq!(store.table_url("ordersx"), "https://abc.supabase.co/rest/v1/ordersx");
    }

    #[test]
    fn test_filters() {
        assert_eq!(
            id_filter("109"),
            vec![("select", "*".to_string()), ("id", "eq.109".to_string())]
        );
        let range = created_between_filter("2024-01-15T00:00:00Z", "2024-01-15T23:59:59Z");
        assert_eq!(range[1], ("created_at", "gte.2024-01-15T00:00:00Z".to_string()));
        assert_eq!(range[2], ("created_at", "lte.2024-01-15T23:59:59Z".to_string()));
    }

    #[test]
    fn test_api_error_prefers_backend_message() {
        let body = r#"{"code":"42P01","details":null,"hint":null,"message":"relation \"public.ordersx\" does not exist"}"#;
        assert_eq!(
            api_error(404, body),
            BackendError::Api {
                status: 404,
                message: "relation \"public.ordersx\" does not exist".to_string(),
            }
        );
        assert_eq!(api_error(502, "").to_string(), "HTTP 502");
        assert_eq!(api_error(500, "upstream down\n").to_string(), "upstream down");
    }
}
