//! The scanner flow: camera, payload extraction, detail view and status update.

pub mod camera;
pub mod error;
pub mod extract;
pub mod flow;
pub mod line_scanner;
pub mod panel;

pub use camera::*;
pub use error::*;
pub use extract::*;
pub use flow::*;
pub use line_scanner::*;
pub use panel::*;
