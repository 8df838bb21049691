//! Products module: catalog snapshots as served by the backend.
//!
//! Pure data and lookups (no IO, no HTTP, no storage).

pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::{NewProduct, Product};
