//! `balcao-client`
//!
//! **Responsibility:** the point-of-sale client for the balcão REST backend.
//!
//! This crate provides:
//! - The sales page: catalog loading, the order draft store, rendering and submission
//! - Product and user management, gated by the session's role
//! - Login/logout with the session kept in local storage
//! - Configuration from the environment
//!
//! The backend remains the authority for everything; the client only decides
//! what to offer and keeps the draft consistent while a sale is in flight.

pub mod admin;
pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod page;
pub mod session;
pub mod state;
pub mod store;
pub mod submit;
pub mod types;
pub mod view;

#[cfg(test)]
mod testing;

pub use backend::Backend;
pub use config::ClientConfig;
pub use error::{ClientError, ErrorKind};
pub use http::HttpBackend;
pub use page::SalesPage;
pub use session::SessionAccessor;
pub use state::SalesStore;
pub use store::{LocalStore, StoreError};
pub use submit::Receipt;
pub use view::{OrderView, SelectOption};
