//! The sales page controller.
//!
//! Binds the explicit [`SalesStore`] to the backend and the renderers. Every
//! mutation returns a freshly rendered [`OrderView`] so the caller can replace
//! what it displays.

use std::sync::Arc;

use balcao_auth::{Permission, Session, require_session};
use balcao_core::ProductId;

use crate::backend::Backend;
use crate::catalog::load_catalog;
use crate::error::ClientError;
use crate::state::SalesStore;
use crate::submit::{Receipt, submit_order};
use crate::view::{OrderView, SelectOption, catalog_options, render_order};

pub struct SalesPage {
    backend: Arc<dyn Backend>,
    session: Session,
    store: Arc<SalesStore>,
}

impl std::fmt::Debug for SalesPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesPage")
            .field("session", &self.session)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl SalesPage {
    /// Open the page for `session`. Nobody logged in, or a role that may not
    /// sell, is refused before anything is fetched.
    pub fn open(backend: Arc<dyn Backend>, session: Option<Session>) -> Result<Self, ClientError> {
        let session = require_session(session.as_ref(), &Permission::SALES_CREATE)?.clone();

        tracing::info!(user_id = %session.user_id, role = %session.role, "sales page opened");

        Ok(Self {
            backend,
            session,
            store: Arc::new(SalesStore::new()),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &Arc<SalesStore> {
        &self.store
    }

    /// Fetch the catalog and return the product selector options.
    pub async fn load_catalog(&self) -> Result<Vec<SelectOption>, ClientError> {
        let catalog = load_catalog(self.backend.as_ref(), &self.store).await?;
        Ok(catalog_options(&catalog))
    }

    pub async fn view(&self) -> OrderView {
        render_order(&self.store.snapshot().await)
    }

    pub async fn add_item(&self, product_id: ProductId, quantity: i64) -> Result<OrderView, ClientError> {
        self.store.add_item(product_id, quantity).await?;
        Ok(self.view().await)
    }

    /// Add from raw form text. An empty product field means nothing selected.
    pub async fn add_item_from_form(&self, product_field: &str, quantity_field: &str) -> Result<OrderView, ClientError> {
        let product_id = ProductId::new(parse_form_number(product_field, "product")?);
        let quantity = parse_form_number(quantity_field, "quantity")?;
        self.add_item(product_id, quantity).await
    }

    pub async fn remove_item(&self, index: usize) -> Result<OrderView, ClientError> {
        let removed = self.store.remove_item(index).await?;
        tracing::debug!(index, product_id = %removed.product_id, "line removed");
        Ok(self.view().await)
    }

    pub async fn submit(&self) -> Result<(Receipt, OrderView), ClientError> {
        let receipt = submit_order(self.backend.as_ref(), &self.store, Some(&self.session)).await?;
        Ok((receipt, self.view().await))
    }
}

/// Read a form field as an integer: blank is 0, integral decimals such as
/// `"3.0"` are accepted, anything else is a validation error.
pub fn parse_form_number(raw: &str, field: &str) -> Result<i64, ClientError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }

    if let Ok(value) = raw.parse::<i64>() {
        return Ok(value);
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 => {
            Ok(value as i64)
        }
        _ => Err(ClientError::validation(format!("{field} must be a whole number, got '{raw}'"))),
    }
}
