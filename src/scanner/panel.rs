//! The scanner's single result container and the order detail view.

use std::fmt;

use chrono::FixedOffset;

use crate::domain::{Order, StatusClass, DONE_STATUS};
use crate::format::{escape_html, format_long_date, or_dash};

const UPDATE_LABEL: &str = "Update Status ➜ Selesai";
const UPDATING_LABEL: &str = "Mengupdate...";
const LOADING_TEXT: &str = "Mengambil data pesanan...";
const COMPLETED_TEXT: &str = "✅ Pesanan telah selesai";
const UPDATED_TEXT: &str = "✅ Status berhasil diupdate menjadi Selesai!";

/// Lifecycle of the "mark as done" action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateState {
    Pending,
    Updating,
    Done,
    Failed,
}

/// The action control rendered for a pending order. It captures the order
/// identifier when the detail view is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionControl {
    order_id: String,
    state: UpdateState,
    label: &'static str,
    disabled: bool,
    visible: bool,
}

impl ActionControl {
    fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            state: UpdateState::Pending,
            label: UPDATE_LABEL,
            disabled: false,
            visible: true,
        }
    }

    /// Handles a click. The first click disables the control and returns the
    /// identifier to update; any later click is ignored.
    pub fn click(&mut self) -> Option<String> {
        if self.disabled || !self.visible || self.state != UpdateState::Pending {
            return None;
        }
        self.state = UpdateState::Updating;
        self.disabled = true;
        self.label = UPDATING_LABEL;
        Some(self.order_id.clone())
    }

    fn complete(&mut self) {
        self.state = UpdateState::Done;
        self.visible = false;
    }

    // The control stays disabled: retrying needs a fresh session.
    fn fail(&mut self) {
        self.state = UpdateState::Failed;
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn state(&self) -> UpdateState {
        self.state
    }

    pub fn label(&self) -> &str {
        self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Rendered details of one order.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: String,
    pub menu: String,
    pub level: String,
    pub drink: String,
    pub status_label: String,
    pub status_class: StatusClass,
    pub created_at: String,
    /// `None` when the order was already done at render time.
    pub action: Option<ActionControl>,
}

impl DetailView {
    pub fn render(order: &Order, offset: FixedOffset) -> Self {
        let status_class = order.status_class();
        Self {
            id: order.id.clone(),
            menu: or_dash(order.menu.as_deref()).to_string(),
            level: or_dash(order.level.as_deref()).to_string(),
            drink: or_dash(order.drink.as_deref()).to_string(),
            status_label: order.status.clone(),
            status_class,
            created_at: format_long_date(&order.created_at, offset),
            action: match status_class {
                StatusClass::Done => None,
                StatusClass::Pending => Some(ActionControl::new(order.id.clone())),
            },
        }
    }

    fn mark_done(&mut self) {
        self.status_label = DONE_STATUS.to_string();
        self.status_class = StatusClass::Done;
        if let Some(action) = self.action.as_mut() {
            action.complete();
        }
    }

    fn to_markup(&self) -> String {
        let footer = match &self.action {
            Some(action) if action.visible => format!(
                "<button{}>{}</button>",
                if action.disabled { " disabled" } else { "" },
                escape_html(action.label)
            ),
            Some(_) => String::new(),
            None => format!(
                "<p style=\"text-align: center; color: #4CAF50;\">{}</p>",
                COMPLETED_TEXT
            ),
        };
        format!(
            "<div class=\"order-details\">\
             <h3>Detail Pesanan:</h3>\
             <p><strong>ID Pesanan:</strong> {}</p>\
             <p><strong>Menu:</strong> {}</p>\
             <p><strong>Level:</strong> {}</p>\
             <p><strong>Minum:</strong> {}</p>\
             <p><strong>Status:</strong> <span class=\"status {}\">{}</span></p>\
             <div class=\"timestamp\"><p>Dibuat pada: {}</p></div>\
             {}\
             </div>",
            escape_html(&self.id),
            escape_html(&self.menu),
            escape_html(&self.level),
            escape_html(&self.drink),
            self.status_class.css_class(),
            escape_html(&self.status_label),
            escape_html(&self.created_at),
            footer
        )
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Detail Pesanan:")?;
        writeln!(f, "  ID Pesanan : {}", self.id)?;
        writeln!(f, "  Menu       : {}", self.menu)?;
        writeln!(f, "  Level      : {}", self.level)?;
        writeln!(f, "  Minum      : {}", self.drink)?;
        writeln!(f, "  Status     : {} ({})", self.status_label, self.status_class)?;
        writeln!(f, "  Dibuat pada: {}", self.created_at)?;
        match &self.action {
            Some(action) if action.visible => {
                let suffix = if action.disabled { " (disabled)" } else { "" };
                writeln!(f, "  [ {} ]{}", action.label, suffix)
            }
            Some(_) => Ok(()),
            None => writeln!(f, "  {}", COMPLETED_TEXT),
        }
    }
}

/// Inline notice appended below the panel content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

impl Banner {
    fn to_markup(&self) -> String {
        let (background, text) = match self {
            Banner::Success(text) => ("#4CAF50", text),
            Banner::Error(text) => ("#ff5252", text),
        };
        format!(
            "<div style=\"margin-top: 15px; padding: 10px; background: {}; \
             color: white; border-radius: 5px;\">{}</div>",
            background,
            escape_html(text)
        )
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Banner::Success(text) | Banner::Error(text) => f.write_str(text),
        }
    }
}

/// Main content of the panel. Replacing it discards any banners.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelBody {
    #[default]
    Idle,
    Loading,
    Detail(DetailView),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultPanel {
    body: PanelBody,
    banners: Vec<Banner>,
}

impl ResultPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, body: PanelBody) {
        self.body = body;
        self.banners.clear();
    }

    pub fn append(&mut self, banner: Banner) {
        self.banners.push(banner);
    }

    pub fn body(&self) -> &PanelBody {
        &self.body
    }

    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    pub fn detail(&self) -> Option<&DetailView> {
        match &self.body {
            PanelBody::Detail(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn action(&self) -> Option<&ActionControl> {
        self.detail().and_then(|detail| detail.action.as_ref())
    }

    /// Routes a click to the action control, if one is shown.
    pub fn click_action(&mut self) -> Option<String> {
        match &mut self.body {
            PanelBody::Detail(detail) => detail.action.as_mut().and_then(ActionControl::click),
            _ => None,
        }
    }

    /// Applies a confirmed update: status replaced in place, control hidden,
    /// success banner appended.
    pub fn apply_update_success(&mut self) {
        if let PanelBody::Detail(detail) = &mut self.body {
            detail.mark_done();
        }
        self.append(Banner::Success(UPDATED_TEXT.to_string()));
    }

    /// Applies a failed update: error banner appended, control left disabled.
    pub fn apply_update_failure(&mut self, message: &str) {
        if let PanelBody::Detail(detail) = &mut self.body {
            if let Some(action) = detail.action.as_mut() {
                action.fail();
            }
        }
        self.append(Banner::Error(format!("❌ Error: {}", message)));
    }

    pub fn to_markup(&self) -> String {
        let mut markup = match &self.body {
            PanelBody::Idle => String::new(),
            PanelBody::Loading => format!(
                "<div style=\"text-align: center; padding: 20px;\">\
                 <div class=\"loading\">{}</div></div>",
                LOADING_TEXT
            ),
            PanelBody::Detail(detail) => detail.to_markup(),
            PanelBody::Error(message) => format!(
                "<div style=\"padding: 15px; background: #fff3cd; color: #856404; \
                 border-radius: 5px;\">⚠️ Error: {}</div>",
                escape_html(message)
            ),
        };
        for banner in &self.banners {
            markup.push_str(&banner.to_markup());
        }
        markup
    }
}

impl fmt::Display for ResultPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            PanelBody::Idle => {}
            PanelBody::Loading => writeln!(f, "{}", LOADING_TEXT)?,
            PanelBody::Detail(detail) => write!(f, "{}", detail)?,
            PanelBody::Error(message) => writeln!(f, "⚠️ Error: {}", message)?,
        }
        for banner in &self.banners {
            writeln!(f, "{}", banner)?;
        }
        Ok(())
    }
}
