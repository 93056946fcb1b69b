use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::status::StatusClass;

/// A single customer order row as stored by the backend.
///
/// Rows are created by the upstream ordering bot; the kiosk only reads them
/// and moves `status` to [`DONE_STATUS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Backend-assigned key. The backend may send it as a number or a string.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub menu: Option<String>,
    /// Spice level; older rows store it as an integer.
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub level: Option<String>,
    #[serde(default, rename = "minum", deserialize_with = "optional_string_or_number")]
    pub drink: Option<String>,
    #[serde(default, rename = "totals")]
    pub total: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub payment: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, rename = "telegram_id", deserialize_with = "optional_string_or_number")]
    pub chat_id: Option<String>,
}

/// The only status value this system ever writes.
pub const DONE_STATUS: &str = "Selesai";

impl Order {
    pub fn new(
        id: impl Into<String>,
        menu: impl Into<String>,
        level: impl Into<String>,
        drink: impl Into<String>,
        status: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            menu: Some(menu.into()),
            level: Some(level.into()),
            drink: Some(drink.into()),
            total: None,
            status: status.into(),
            payment: None,
            created_at,
            chat_id: None,
        }
    }

    pub fn status_class(&self) -> StatusClass {
        StatusClass::of(&self.status)
    }

    pub fn is_done(&self) -> bool {
        self.status_class() == StatusClass::Done
    }
}

/// Body of the status update request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusPatch {
    pub status: String,
}

impl StatusPatch {
    pub fn done() -> Self {
        Self {
            status: DONE_STATUS.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Integer(i64),
    Float(f64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Integer(n) => n.to_string(),
            StringOrNumber::Float(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer).map(|value| value.map(String::from))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
