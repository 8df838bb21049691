//! Order submission: one request per attempt, all-or-nothing on the draft.

use chrono::{DateTime, Utc};
use serde::Serialize;

use balcao_auth::{Permission, Session, require_session};
use balcao_core::Money;

use crate::backend::Backend;
use crate::error::ClientError;
use crate::state::SalesStore;

/// What the user is shown after the backend accepted an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub sale_id: Option<i64>,
    pub message: Option<String>,
    pub item_count: usize,
    pub total: Money,
    pub submitted_at: DateTime<Utc>,
}

/// Submit the store's draft on behalf of `session`.
///
/// Preconditions are checked before any request: a session that may sell
/// (`AuthError` otherwise) and a non-empty draft (`EmptyOrder`). The draft is
/// locked for the duration of the request. On success it is cleared; on any
/// failure it is unlocked unchanged and the error is returned for display.
pub async fn submit_order(
    backend: &dyn Backend,
    store: &SalesStore,
    session: Option<&Session>,
) -> Result<Receipt, ClientError> {
    let session = require_session(session, &Permission::SALES_CREATE)?;
    let payload = store.begin_submission(session.user_id).await?;

    tracing::info!(
        user_id = %session.user_id,
        items = payload.items.len(),
        total = %payload.total(),
        "submitting order"
    );

    match backend.create_sale(&payload).await {
        Ok(created) => {
            store.complete_submission().await?;
            tracing::info!(sale_id = ?created.sale_id, "order accepted");

            Ok(Receipt {
                sale_id: created.sale_id,
                message: created.message,
                item_count: payload.items.len(),
                total: payload.total(),
                submitted_at: Utc::now(),
            })
        }
        Err(err) => {
            store.abort_submission().await?;
            tracing::warn!(error = %err, "order rejected; draft kept");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::{FakeBackend, Failure};
    use balcao_auth::Role;
    use balcao_core::{ProductId, UserId};
    use balcao_products::{Catalog, Product};
    use balcao_sales::{DraftError, DraftState};

    fn seller() -> Session {
        Session::new(UserId::new(5), Role::Seller)
    }

    async fn store_with_items() -> SalesStore {
        let store = SalesStore::new();
        store
            .replace_catalog(Catalog::new(vec![
                Product::new(ProductId::new(1), "Caneta", Money::from_cents(250)),
                Product::new(ProductId::new(2), "Caderno", Money::from_cents(1290)),
            ]))
            .await;
        store.add_item(ProductId::new(1), 3).await.unwrap();
        store.add_item(ProductId::new(2), 1).await.unwrap();
        store
    }

    #[tokio::test]
    async fn success_sends_one_payload_and_clears_draft() {
        let backend = FakeBackend::new();
        let store = store_with_items().await;
        let session = seller();

        let receipt = submit_order(&backend, &store, Some(&session)).await.unwrap();

        assert_eq!(receipt.item_count, 2);
        assert_eq!(receipt.total, Money::from_cents(2040));
        assert_eq!(receipt.sale_id, Some(1));

        let sent = backend.sales();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].user_id, UserId::new(5));
        assert_eq!(sent[0].items.len(), 2);

        assert!(store.snapshot().await.is_empty());
        assert_eq!(store.draft_state().await, DraftState::Empty);
    }

    #[tokio::test]
    async fn failure_leaves_draft_identical() {
        let backend = FakeBackend::new();
        backend.fail_sales(Failure::Api(400, "Erro ao registrar venda: estoque".to_string()));
        let store = store_with_items().await;
        let before = store.snapshot().await;

        let err = submit_order(&backend, &store, Some(&seller())).await.unwrap_err();

        assert_eq!(err.user_message(), "Erro ao registrar venda: estoque");
        assert_eq!(store.snapshot().await, before);
        assert_eq!(store.draft_state().await, DraftState::Building);
        assert_eq!(backend.sales().len(), 1, "no automatic retry");
    }

    #[tokio::test]
    async fn network_failure_leaves_draft_identical() {
        let backend = FakeBackend::new();
        backend.fail_sales(Failure::Network("connection reset".to_string()));
        let store = store_with_items().await;
        let before = store.snapshot().await;

        let err = submit_order(&backend, &store, Some(&seller())).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Network);
        assert_eq!(store.snapshot().await, before);
    }

    #[tokio::test]
    async fn empty_draft_issues_no_request() {
        let backend = FakeBackend::new();
        let store = SalesStore::new();

        let err = submit_order(&backend, &store, Some(&seller())).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::EmptyOrder);
        assert!(backend.sales().is_empty());
    }

    #[tokio::test]
    async fn missing_session_issues_no_request() {
        let backend = FakeBackend::new();
        let store = store_with_items().await;

        let err = submit_order(&backend, &store, None).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Auth);
        assert!(backend.sales().is_empty());
        assert_eq!(store.snapshot().await.len(), 2);
    }

    #[tokio::test]
    async fn client_role_cannot_submit() {
        let backend = FakeBackend::new();
        let store = store_with_items().await;
        let client = Session::new(UserId::new(8), Role::Client);

        let err = submit_order(&backend, &store, Some(&client)).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Auth);
        assert!(backend.sales().is_empty());
    }

    #[tokio::test]
    async fn mutations_are_refused_while_request_is_in_flight() {
        let backend = Arc::new(FakeBackend::new());
        let gate = backend.gate_sales();
        let store = Arc::new(store_with_items().await);

        let task = {
            let backend = backend.clone();
            let store = store.clone();
            tokio::spawn(async move {
                let session = seller();
                submit_order(backend.as_ref(), &store, Some(&session)).await
            })
        };

        gate.started.notified().await;
        assert_eq!(store.draft_state().await, DraftState::Submitting);
        assert_eq!(
            store.add_item(ProductId::new(1), 1).await.unwrap_err(),
            DraftError::SubmissionInProgress
        );
        assert_eq!(store.remove_item(0).await.unwrap_err(), DraftError::SubmissionInProgress);

        gate.release.notify_one();
        let receipt = task.await.unwrap().unwrap();

        assert_eq!(receipt.item_count, 2);
        assert!(store.snapshot().await.is_empty());
    }
}
