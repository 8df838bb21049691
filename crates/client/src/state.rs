//! Explicit state owned by the sales page: the loaded catalog and the draft.

use tokio::sync::{Mutex, RwLock};

use balcao_core::{ProductId, UserId};
use balcao_products::Catalog;
use balcao_sales::{DraftError, DraftState, LineItem, OrderDraft, SalePayload};

/// Owner of the page's mutable state.
///
/// Each method holds its locks for one synchronous step only and never across
/// a network call, so add/remove are atomic with respect to one another.
#[derive(Debug, Default)]
pub struct SalesStore {
    catalog: RwLock<Catalog>,
    draft: Mutex<OrderDraft>,
}

impl SalesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn catalog(&self) -> Catalog {
        self.catalog.read().await.clone()
    }

    /// Swap in a freshly loaded catalog. Existing lines keep their captured prices.
    pub async fn replace_catalog(&self, catalog: Catalog) {
        *self.catalog.write().await = catalog;
    }

    pub async fn snapshot(&self) -> OrderDraft {
        self.draft.lock().await.clone()
    }

    pub async fn draft_state(&self) -> DraftState {
        self.draft.lock().await.state()
    }

    pub async fn add_item(&self, product_id: ProductId, quantity: i64) -> Result<LineItem, DraftError> {
        let catalog = self.catalog.read().await;
        let mut draft = self.draft.lock().await;
        draft.add_item(&catalog, product_id, quantity).cloned()
    }

    pub async fn remove_item(&self, index: usize) -> Result<LineItem, DraftError> {
        self.draft.lock().await.remove_item(index)
    }

    pub async fn begin_submission(&self, user_id: UserId) -> Result<SalePayload, DraftError> {
        self.draft.lock().await.begin_submission(user_id)
    }

    pub async fn complete_submission(&self) -> Result<(), DraftError> {
        self.draft.lock().await.complete_submission()
    }

    pub async fn abort_submission(&self) -> Result<(), DraftError> {
        self.draft.lock().await.abort_submission()
    }
}
