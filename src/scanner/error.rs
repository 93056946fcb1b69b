use thiserror::Error;

use crate::backend::BackendError;
use super::camera::CameraError;

/// Everything that can end a scan before an order is shown. All variants are
/// rendered inline in the result panel.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScanError {
    #[error("Format QR code tidak valid. ID Pesanan tidak ditemukan.")]
    Format,
    #[error("Pesanan dengan ID {0} tidak ditemukan")]
    NotFound(String),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    Camera(#[from] CameraError),
}
