use thiserror::Error;

use crate::{Permission, Role, Session};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("you must be logged in")]
    NotLoggedIn,

    #[error("forbidden: role '{role}' is missing permission '{permission}'")]
    Forbidden { role: Role, permission: String },
}

/// Check a session's role against a required permission.
///
/// Pure policy check: no IO, no panics.
pub fn authorize(session: &Session, required: &Permission) -> Result<(), AuthzError> {
    let granted = session
        .role
        .permissions()
        .iter()
        .any(|p| p.is_wildcard() || p == required);

    if granted {
        Ok(())
    } else {
        Err(AuthzError::Forbidden {
            role: session.role,
            permission: required.as_str().to_string(),
        })
    }
}

/// Turn an optional session into a logged-in one holding `required`.
pub fn require_session<'a>(
    session: Option<&'a Session>,
    required: &Permission,
) -> Result<&'a Session, AuthzError> {
    let session = session.ok_or(AuthzError::NotLoggedIn)?;
    authorize(session, required)?;
    Ok(session)
}
