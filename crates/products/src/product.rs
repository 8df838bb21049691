use serde::{Deserialize, Serialize};

use balcao_core::{DomainError, DomainResult, Entity, Money, ProductId};

/// A product row as listed by `GET /produtos`.
///
/// Immutable snapshot: the client never edits it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco")]
    pub unit_price: Money,
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "estoque", default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, unit_price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            category: None,
            stock: None,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

/// Body of `POST /produtos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "preco")]
    pub unit_price: Money,
}

impl NewProduct {
    /// Build from raw form fields, trimming text and rejecting blanks.
    pub fn parse(name: &str, category: &str, price: &str) -> DomainResult<Self> {
        let product = Self {
            name: name.trim().to_string(),
            category: category.trim().to_string(),
            unit_price: price.parse()?,
        };
        product.validate()?;
        Ok(product)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.is_empty() {
            return Err(DomainError::validation("product name is required"));
        }
        if self.category.is_empty() {
            return Err(DomainError::validation("product category is required"));
        }
        if self.unit_price.is_negative() {
            return Err(DomainError::validation("price cannot be negative"));
        }
        Ok(())
    }
}
