//! Wire types for backend endpoints that have no home in the domain crates.

use serde::{Deserialize, Serialize};

use balcao_auth::Session;
use balcao_core::{DomainError, DomainResult, Entity, GroupId, UserId};

/// A user row as listed by `GET /usuarios`.
///
/// `grupo_id` stays raw here so that one unknown group does not make the
/// whole listing unreadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "grupo_id")]
    pub group_id: GroupId,
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

/// Body of `POST /usuarios`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
    #[serde(rename = "grupo_id")]
    pub group_id: GroupId,
}

impl NewUser {
    pub fn parse(name: &str, email: &str, password: &str, group: &str) -> DomainResult<Self> {
        let name = name.trim();
        let email = email.trim();
        let password = password.trim();

        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(DomainError::validation("name, e-mail and password are required"));
        }

        let group_id: GroupId = group.parse()?;
        if !group_id.is_valid() {
            return Err(DomainError::invalid_id(format!("grupo_id {group_id}")));
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            group_id,
        })
    }
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// The account e-mail.
    #[serde(rename = "usuario")]
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "mensagem", default)]
    pub message: Option<String>,
    #[serde(rename = "usuario")]
    pub session: Session,
}

/// Generic acknowledgement (`{"message": ...}` / `{"mensagem": ...}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(alias = "mensagem", default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
}

/// Success body of `POST /vendas`. Both fields are optional: only the status
/// code decides success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SaleCreated {
    #[serde(rename = "mensagem", alias = "message", default)]
    pub message: Option<String>,
    #[serde(rename = "id_venda", default)]
    pub sale_id: Option<i64>,
}
