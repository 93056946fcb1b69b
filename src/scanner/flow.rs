use tracing::{info, instrument, warn};

use crate::app_system::AppContext;
use super::camera::{Camera, ScanSession};
use super::error::ScanError;
use super::extract::extract_order_id;
use super::panel::{DetailView, PanelBody, ResultPanel};

/// Scan → extract → fetch → render → update, over one result panel.
///
/// Errors never escape the flow; they end up as inline banners.
pub struct ScannerFlow {
    ctx: AppContext,
    panel: ResultPanel,
}

impl ScannerFlow {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            panel: ResultPanel::new(),
        }
    }

    pub fn panel(&self) -> &ResultPanel {
        &self.panel
    }

    /// Runs one scan session to completion and renders its outcome.
    pub async fn run<C: Camera>(&mut self, session: ScanSession<'_, C>) {
        match session.scan_once().await {
            Ok(decoded) => self.on_decoded(&decoded).await,
            Err(e) => self.show_error(ScanError::from(e)),
        }
    }

    /// Handles a decoded payload. The camera is already stopped at this point.
    #[instrument(skip(self, decoded))]
    pub async fn on_decoded(&mut self, decoded: &str) {
        if let Err(e) = self.lookup(decoded).await {
            self.show_error(e);
        }
    }

    async fn lookup(&mut self, decoded: &str) -> Result<(), ScanError> {
        let id = extract_order_id(decoded)?;
        self.panel.replace(PanelBody::Loading);
        info!(order_id = %id, "Looking up order");

        let order = self
            .ctx
            .backend
            .fetch_order(&self.ctx.tables.scan, &id)
            .await?
            .ok_or_else(|| ScanError::NotFound(id.clone()))?;

        let view = DetailView::render(&order, self.ctx.display_offset);
        info!(order_id = %order.id, status = %order.status, "Order rendered");
        self.panel.replace(PanelBody::Detail(view));
        Ok(())
    }

    fn show_error(&mut self, error: ScanError) {
        warn!(error = %error, "Scan failed");
        self.panel.replace(PanelBody::Error(error.to_string()));
    }

    /// Synchronous half of a click: disables the control and returns the
    /// identifier to update, or `None` when the click must be ignored.
    pub fn begin_update(&mut self) -> Option<String> {
        self.panel.click_action()
    }

    /// Handles a click on the action control end to end.
    #[instrument(skip(self))]
    pub async fn on_update_clicked(&mut self) {
        let Some(id) = self.begin_update() else {
            return;
        };
        info!(order_id = %id, "Marking order as done");
        match self.ctx.backend.mark_done(&self.ctx.tables.scan, &id).await {
            Ok(()) => self.panel.apply_update_success(),
            Err(e) => {
                warn!(order_id = %id, error = %e, "Status update failed");
                self.panel.apply_update_failure(&e.to_string());
            }
        }
    }
}
