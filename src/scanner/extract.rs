use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ScanError;

static ORDER_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ID Pesanan: #([0-9]+)").expect("order id pattern is valid"));

/// Pulls the numeric order identifier out of a decoded payload such as
/// `ID Pesanan: #109`. The label may appear anywhere in the text.
pub fn extract_order_id(decoded: &str) -> Result<String, ScanError> {
    ORDER_ID_PATTERN
        .captures(decoded)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(ScanError::Format)
}
