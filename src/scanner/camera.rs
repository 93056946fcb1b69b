//! Capture stream abstraction and the one-shot scan session.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Which camera to prefer when several are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacingMode {
    /// Rear-facing camera.
    #[default]
    Environment,
    User,
}

/// Scan window parameters handed to the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraConfig {
    pub facing_mode: FacingMode,
    pub fps: u32,
    /// Width and height of the detection box, in pixels.
    pub qrbox: (u32, u32),
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            facing_mode: FacingMode::Environment,
            fps: 10,
            qrbox: (250, 250),
        }
    }
}

/// Per-frame outcome reported by the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeEvent {
    Decoded(String),
    Failed(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CameraError {
    #[error("Camera unavailable: {0}")]
    Unavailable(String),
    #[error("Scan stream ended before a code was decoded")]
    StreamEnded,
    #[error("Failed to stop camera: {0}")]
    Stop(String),
}

/// A capture device paired with a QR decoder.
#[async_trait]
pub trait Camera: Send {
    /// Starts capturing and returns the stream of decode events.
    async fn start(
        &mut self,
        config: &CameraConfig,
    ) -> Result<mpsc::Receiver<DecodeEvent>, CameraError>;

    /// Releases the capture stream.
    async fn stop(&mut self) -> Result<(), CameraError>;
}

/// One scan session: consumed by [`ScanSession::scan_once`], so a new
/// session is needed for every scan.
pub struct ScanSession<'a, C: Camera> {
    camera: &'a mut C,
    config: CameraConfig,
}

impl<'a, C: Camera> ScanSession<'a, C> {
    pub fn new(camera: &'a mut C, config: CameraConfig) -> Self {
        Self { camera, config }
    }

    /// Samples decode events until the first success, then stops the camera
    /// and returns the raw decoded text. Frame failures do not end the scan.
    #[instrument(name = "scan_session", skip(self), fields(fps = self.config.fps))]
    pub async fn scan_once(mut self) -> Result<String, CameraError> {
        let mut events = self.camera.start(&self.config).await?;
        info!("Scanning started");

        while let Some(event) = events.recv().await {
            match event {
                DecodeEvent::Decoded(text) => {
                    self.camera.stop().await?;
                    info!("Code decoded, camera stopped");
                    return Ok(text);
                }
                DecodeEvent::Failed(reason) => debug!(%reason, "No code in frame"),
            }
        }

        Err(CameraError::StreamEnded)
    }
}
