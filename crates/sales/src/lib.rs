//! Sales module: the in-memory order draft built at the counter.
//!
//! Pure state transitions (no IO, no HTTP, no storage). Sending the draft is
//! the client's job; this crate only decides what may change and when.

pub mod error;
pub mod order;

pub use error::DraftError;
pub use order::{DraftState, LineItem, OrderDraft, SalePayload};
