//! The listing flow: today's orders as a table.

pub mod flow;
pub mod table;

pub use flow::*;
pub use table::*;
