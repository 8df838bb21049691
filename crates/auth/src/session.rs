//! The logged-in user's identity as the backend returned it at login.

use serde::{Deserialize, Serialize};

use balcao_core::UserId;

use crate::Role;

/// Stored session blob: `{id, nome, email, grupo_id}`.
///
/// Extra keys written by older clients are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "id")]
    pub user_id: UserId,
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "grupo_id")]
    pub role: Role,
}

impl Session {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self {
            user_id,
            name: None,
            email: None,
            role,
        }
    }

    /// Name for greetings, falling back to the e-mail and then the id.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| format!("user #{}", self.user_id))
    }
}
