//! Backend collaborator: the remote "orders" tables behind a service task.

pub mod client;
pub mod error;
pub mod messages;
pub mod postgrest;
pub mod service;
pub mod store;

pub use client::*;
pub use error::*;
pub use messages::*;
pub use postgrest::PostgrestStore;
pub use service::*;
pub use store::*;
