//! Startup configuration read from the environment (and an optional `.env`).

use std::fmt;

use chrono::FixedOffset;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::scanner::CameraConfig;

pub const DEFAULT_SCAN_TABLE: &str = "ordersx";
pub const DEFAULT_LIST_TABLE: &str = "orders";
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 7;

/// Fatal startup errors. The application does not initialize without
/// the backend URL and key.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing backend environment variable {0}")]
    MissingVar(&'static str),
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

/// Logical table names. The scanner and the listing address the orders
/// collection under different names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    pub scan: String,
    pub listing: String,
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            scan: DEFAULT_SCAN_TABLE.to_string(),
            listing: DEFAULT_LIST_TABLE.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub backend_url: Url,
    pub api_key: String,
    pub tables: TableNames,
    pub display_offset: FixedOffset,
    pub camera: CameraConfig,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("backend_url", &self.backend_url.as_str())
            .field("api_key", &"<redacted>")
            .field("tables", &self.tables)
            .field("display_offset", &self.display_offset)
            .field("camera", &self.camera)
            .finish()
    }
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let env_file_loaded = dotenvy::dotenv().map(|_| true).or_else(|err| match err {
            dotenvy::Error::Io(_) => Ok(false),
            _ => Err(err),
        })?;
        debug!(env_file_loaded, "Reading configuration from environment");
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let url = read("SUPABASE_URL")
            .or_else(|| read("VITE_SUPABASE_URL"))
            .ok_or(ConfigError::MissingVar("SUPABASE_URL"))?;
        let api_key = read("SUPABASE_KEY")
            .or_else(|| read("VITE_SUPABASE_KEY"))
            .ok_or(ConfigError::MissingVar("SUPABASE_KEY"))?;
        let backend_url = Url::parse(url.trim())?;

        let tables = TableNames {
            scan: read("KIOSK_SCAN_TABLE").unwrap_or_else(|| DEFAULT_SCAN_TABLE.to_string()),
            listing: read("KIOSK_LIST_TABLE").unwrap_or_else(|| DEFAULT_LIST_TABLE.to_string()),
        };

        let offset_hours = match read("KIOSK_UTC_OFFSET_HOURS") {
            Some(value) => parse_number::<i32>("KIOSK_UTC_OFFSET_HOURS", &value)?,
            None => DEFAULT_UTC_OFFSET_HOURS,
        };
        let display_offset = offset_from_hours(offset_hours).ok_or(ConfigError::InvalidValue {
            name: "KIOSK_UTC_OFFSET_HOURS",
            value: offset_hours.to_string(),
        })?;

        let mut camera = CameraConfig::default();
        if let Some(value) = read("KIOSK_CAMERA_FPS") {
            camera.fps = parse_number("KIOSK_CAMERA_FPS", &value)?;
        }
        if let Some(value) = read("KIOSK_QRBOX") {
            let side = parse_number("KIOSK_QRBOX", &value)?;
            camera.qrbox = (side, side);
        }

        Ok(Self {
            backend_url,
            api_key,
            tables,
            display_offset,
            camera,
        })
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}

fn offset_from_hours(hours: i32) -> Option<FixedOffset> {
    if !(-12..=14).contains(&hours) {
        return None;
    }
    FixedOffset::east_opt(hours * 3600)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_KEY", "anon-key"),
        ]))
        .unwrap();

        assert_eq!(config.tables, TableNames::default());
        assert_eq!(config.tables.scan, "ordersx");
        assert_eq!(config.tables.listing, "orders");
        assert_eq!(config.display_offset.local_minus_utc(), 7 * 3600);
        assert_eq!(config.camera, CameraConfig::default());
        assert!(!format!("{:?}", config).contains("anon-key"));
    }

    #[test]
    fn test_missing_secrets_are_fatal() {
        let err = AppConfig::from_lookup(lookup(&[("SUPABASE_KEY", "k")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("SUPABASE_URL")));

        let err = AppConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_KEY", "   "),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("SUPABASE_KEY")));
    }

    #[test]
    fn test_vite_fallback_and_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("VITE_SUPABASE_URL", "https://abc.supabase.co"),
            ("VITE_SUPABASE_KEY", "k"),
            ("KIOSK_LIST_TABLE", "ordersx"),
            ("KIOSK_UTC_OFFSET_HOURS", "8"),
            ("KIOSK_CAMERA_FPS", "15"),
            ("KIOSK_QRBOX", "300"),
        ]))
        .unwrap();

        assert_eq!(config.tables.listing, "ordersx");
        assert_eq!(config.display_offset.local_minus_utc(), 8 * 3600);
        assert_eq!(config.camera.fps, 15);
        assert_eq!(config.camera.qrbox, (300, 300));
    }

    #[test]
    fn test_invalid_values() {
        let base = [("SUPABASE_URL", "https://abc.supabase.co"), ("SUPABASE_KEY", "k")];

        let mut vars = base.to_vec();
        vars.push(("KIOSK_UTC_OFFSET_HOURS", "20"));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&vars)).unwrap_err(),
            ConfigError::InvalidValue { name: "KIOSK_UTC_OFFSET_HOURS", .. }
        ));

        let err = AppConfig::from_lookup(lookup(&[("SUPABASE_URL", "not a url"), ("SUPABASE_KEY", "k")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
    }
}
