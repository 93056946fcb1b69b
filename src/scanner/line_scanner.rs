use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::camera::{Camera, CameraConfig, CameraError, DecodeEvent};

/// [`Camera`] fed by a line-oriented reader.
///
/// Hand-held and fixed-mount QR scanners in keyboard mode type each decoded
/// payload followed by Enter, so every non-blank line is a decode and every
/// blank line a failed frame. Reading ends after the first decode, and the
/// reader can be taken back with [`LineScanner::into_reader`].
pub struct LineScanner<R> {
    reader: Option<R>,
    running: Option<Running<R>>,
}

struct Running<R> {
    task: JoinHandle<R>,
    stop: oneshot::Sender<()>,
}

impl LineScanner<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R> LineScanner<R>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
            running: None,
        }
    }

    /// Returns the underlying reader once the scanner is stopped.
    pub fn into_reader(self) -> Option<R> {
        self.reader
    }
}

async fn read_until_decoded<R>(
    reader: R,
    tx: mpsc::Sender<DecodeEvent>,
    mut stop: oneshot::Receiver<()>,
) -> R
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let mut lines = reader.lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line,
            _ = &mut stop => break,
        };
        let (event, done) = match line {
            Ok(Some(line)) if line.trim().is_empty() => {
                (DecodeEvent::Failed("empty scan".to_string()), false)
            }
            Ok(Some(line)) => (DecodeEvent::Decoded(line.trim_end().to_string()), true),
            Ok(None) => break,
            Err(e) => (DecodeEvent::Failed(e.to_string()), false),
        };
        if tx.send(event).await.is_err() || done {
            break;
        }
    }
    debug!("Line scanner stopped reading");
    lines.into_inner()
}

#[async_trait]
impl<R> Camera for LineScanner<R>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    async fn start(
        &mut self,
        config: &CameraConfig,
    ) -> Result<mpsc::Receiver<DecodeEvent>, CameraError> {
        let reader = self
            .reader
            .take()
            .ok_or_else(|| CameraError::Unavailable("scanner input already in use".to_string()))?;
        info!(facing_mode = ?config.facing_mode, fps = config.fps, "Opening line scanner");

        let (tx, rx) = mpsc::channel(config.fps.max(1) as usize);
        let (stop, stop_rx) = oneshot::channel();
        let task = tokio::spawn(read_until_decoded(reader, tx, stop_rx));
        self.running = Some(Running { task, stop });
        Ok(rx)
    }

    async fn stop(&mut self) -> Result<(), CameraError> {
        let Running { task, stop } = self
            .running
            .take()
            .ok_or_else(|| CameraError::Stop("scanner is not running".to_string()))?;
        if stop.send(()).is_err() {
            debug!("Line scanner already finished");
        }
        match task.await {
            Ok(reader) => {
                self.reader = Some(reader);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Line scanner task failed");
                Err(CameraError::Stop(e.to_string()))
            }
        }
    }
}
