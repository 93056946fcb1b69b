//! System wiring, startup, and shutdown logic.

pub mod kiosk_system;
pub mod tracing;

pub use self::kiosk_system::*;
pub use self::tracing::*;
