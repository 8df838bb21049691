//! `balcao-core`: shared building blocks for the sales client.
//!
//! This crate contains **pure** primitives (no IO, no HTTP, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::{Entity, find_by_id};
pub use error::{DomainError, DomainResult};
pub use id::{GroupId, ProductId, UserId};
pub use value_object::{Money, ValueObject};
