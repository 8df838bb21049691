//! Client-side error model.

use thiserror::Error;

use balcao_auth::AuthzError;
use balcao_core::DomainError;
use balcao_sales::DraftError;

use crate::store::StoreError;

/// Coarse classification used when showing a blocking message to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure or non-success HTTP status.
    Network,
    /// Bad user input (missing product, non-positive quantity, blank field).
    Validation,
    /// Submit with no items.
    EmptyOrder,
    /// No session, or the session's role may not do this.
    Auth,
    /// Removal index out of range.
    Index,
    /// The draft is locked by an outstanding submission.
    Busy,
    /// Local storage failure.
    Storage,
    /// Invalid configuration.
    Config,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("{detail} (HTTP {status})")]
    Api { status: u16, detail: String },

    #[error(transparent)]
    Auth(#[from] AuthzError),

    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Network(_) | ClientError::Api { .. } => ErrorKind::Network,
            ClientError::Auth(_) => ErrorKind::Auth,
            ClientError::Draft(err) => match err {
                DraftError::EmptyOrder => ErrorKind::EmptyOrder,
                DraftError::IndexOutOfBounds { .. } => ErrorKind::Index,
                DraftError::SubmissionInProgress | DraftError::NotSubmitting => ErrorKind::Busy,
                _ => ErrorKind::Validation,
            },
            ClientError::Validation(_) => ErrorKind::Validation,
            ClientError::Store(_) => ErrorKind::Storage,
            ClientError::Config(_) => ErrorKind::Config,
        }
    }

    /// Text for the blocking message box; the backend's `detail` when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}

impl From<DomainError> for ClientError {
    fn from(err: DomainError) -> Self {
        ClientError::Validation(err.to_string())
    }
}
