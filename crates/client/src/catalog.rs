//! Catalog loading for the sales page.

use balcao_products::Catalog;

use crate::backend::Backend;
use crate::error::ClientError;
use crate::state::SalesStore;

/// Fetch the product listing and install it as the page catalog.
///
/// On failure the previous catalog and the draft are left exactly as they
/// were; the error is returned for display.
pub async fn load_catalog(backend: &dyn Backend, store: &SalesStore) -> Result<Catalog, ClientError> {
    let products = match backend.list_products().await {
        Ok(products) => products,
        Err(err) => {
            tracing::warn!(error = %err, "catalog load failed; keeping previous catalog");
            return Err(err);
        }
    };

    let catalog = Catalog::new(products);
    store.replace_catalog(catalog.clone()).await;

    tracing::info!(products = catalog.len(), "catalog loaded");
    Ok(catalog)
}
