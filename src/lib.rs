//! # Order Kiosk
//!
//! Counter-side tooling for a small food stall whose orders are created by a
//! chat bot and stored in a hosted PostgREST backend.
//!
//! - **Scanner flow** - a QR payload such as `ID Pesanan: #109` is decoded, the
//!   order is fetched and shown, and the operator can mark it done →
//!   [`ScannerFlow`](scanner::ScannerFlow)
//! - **Listing flow** - today's orders rendered as a table →
//!   [`render_orders_today`](listing::render_orders_today)
//!
//! Both flows talk to the backend through a [`BackendClient`](backend::BackendClient)
//! handle served by a [`BackendService`](backend::BackendService) task, wired up by
//! [`KioskSystem`](app_system::KioskSystem).
//!
//! ## Configuration
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SUPABASE_URL` (or `VITE_SUPABASE_URL`) | required |
//! | `SUPABASE_KEY` (or `VITE_SUPABASE_KEY`) | required |
//! | `KIOSK_SCAN_TABLE` | `ordersx` |
//! | `KIOSK_LIST_TABLE` | `orders` |
//! | `KIOSK_UTC_OFFSET_HOURS` | `7` |
//! | `KIOSK_CAMERA_FPS` | `10` |
//! | `KIOSK_QRBOX` | `250` |
//!
//! A `.env` file in the working directory is loaded first when present.
//! `RUST_LOG` controls log verbosity (default `info`).

pub mod app_system;
pub mod backend;
pub mod config;
pub mod domain;
pub mod format;
pub mod listing;
pub mod scanner;

#[cfg(test)]
mod mock_framework;
