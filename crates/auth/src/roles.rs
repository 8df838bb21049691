use serde::{Deserialize, Serialize};

use balcao_core::{DomainError, GroupId};

use crate::Permission;

/// Role of a user, carried by the backend as the numeric `grupo_id`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Role {
    Admin,
    Seller,
    Client,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Seller, Role::Client];

    pub fn from_group_id(group: GroupId) -> Result<Self, DomainError> {
        match group.get() {
            1 => Ok(Role::Admin),
            2 => Ok(Role::Seller),
            3 => Ok(Role::Client),
            other => Err(DomainError::invalid_id(format!("unknown grupo_id {other}"))),
        }
    }

    pub fn group_id(self) -> GroupId {
        match self {
            Role::Admin => GroupId::new(1),
            Role::Seller => GroupId::new(2),
            Role::Client => GroupId::new(3),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Seller => "seller",
            Role::Client => "client",
        }
    }

    /// Static role → permission mapping.
    pub fn permissions(self) -> &'static [Permission] {
        const ADMIN: &[Permission] = &[Permission::WILDCARD];
        const SELLER: &[Permission] = &[Permission::PRODUCTS_READ, Permission::SALES_CREATE];
        const CLIENT: &[Permission] = &[Permission::PRODUCTS_READ];

        match self {
            Role::Admin => ADMIN,
            Role::Seller => SELLER,
            Role::Client => CLIENT,
        }
    }
}

impl TryFrom<i64> for Role {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Role::from_group_id(GroupId::new(value))
    }
}

impl From<Role> for i64 {
    fn from(value: Role) -> Self {
        value.group_id().get()
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
