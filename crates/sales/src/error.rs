use thiserror::Error;

use balcao_core::ProductId;

/// Why a draft transition was refused. The draft is unchanged in every case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("select a product")]
    MissingProduct,

    #[error("quantity must be positive (got {0})")]
    NonPositiveQuantity(i64),

    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductId),

    #[error("order total out of range when adding product {0}")]
    TotalOverflow(ProductId),

    #[error("no item at index {index} (draft has {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("the order has no items")]
    EmptyOrder,

    #[error("a submission is already in progress")]
    SubmissionInProgress,

    #[error("no submission is in progress")]
    NotSubmitting,
}
