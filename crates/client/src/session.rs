//! The one place that reads, writes and clears the stored session.

use balcao_auth::Session;

use crate::backend::Backend;
use crate::error::ClientError;
use crate::store::{LocalStore, StoreError};
use crate::types::LoginRequest;

/// Fixed local-storage key holding the session blob.
pub const SESSION_KEY: &str = "usuario";

#[derive(Debug, Clone)]
pub struct SessionAccessor {
    store: LocalStore,
}

impl SessionAccessor {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// The current session, or `None` when nobody is logged in.
    ///
    /// A blob that does not parse (or names an unknown group) counts as
    /// "not logged in"; only storage failures are errors.
    pub async fn read(&self) -> Result<Option<Session>, StoreError> {
        let Some(raw) = self.store.get(SESSION_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                tracing::warn!(error = %err, "stored session is unreadable; treating as logged out");
                Ok(None)
            }
        }
    }

    pub async fn save(&self, session: &Session) -> Result<(), StoreError> {
        self.store.set_json(SESSION_KEY, session).await
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(SESSION_KEY).await
    }
}

/// Authenticate against the backend and store the returned session.
pub async fn login(
    backend: &dyn Backend,
    sessions: &SessionAccessor,
    email: &str,
    password: &str,
) -> Result<Session, ClientError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ClientError::validation("e-mail and password are required"));
    }

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let session = backend.login(&request).await?;
    sessions.save(&session).await?;

    tracing::info!(user_id = %session.user_id, role = %session.role, "logged in");
    Ok(session)
}

/// Forget the stored session.
pub async fn logout(sessions: &SessionAccessor) -> Result<(), ClientError> {
    sessions.clear().await?;
    tracing::info!("logged out");
    Ok(())
}
