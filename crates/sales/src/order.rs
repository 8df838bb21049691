use serde::{Deserialize, Serialize};

use balcao_core::{Money, ProductId, UserId};
use balcao_products::Catalog;

use crate::DraftError;

/// One product + quantity entry of a draft, priced when it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "quantidade")]
    pub quantity: i64,
    #[serde(rename = "preco")]
    pub unit_price: Money,
    #[serde(rename = "total")]
    pub line_total: Money,
}

/// Body of `POST /vendas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalePayload {
    #[serde(rename = "id_usuario")]
    pub user_id: UserId,
    #[serde(rename = "itens")]
    pub items: Vec<LineItem>,
}

impl SalePayload {
    pub fn total(&self) -> Money {
        self.items.iter().map(|i| i.line_total).sum()
    }
}

/// Observable lifecycle of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftState {
    Empty,
    Building,
    Submitting,
}

/// The unsubmitted sales order.
///
/// Insertion order is display order. Adding the same product twice yields two
/// independent lines. While a submission is outstanding every mutation is
/// refused, so the payload that was sent is exactly what gets cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    items: Vec<LineItem>,
    submitting: bool,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Grand total: sum of every line total.
    pub fn total(&self) -> Money {
        self.items.iter().map(|i| i.line_total).sum()
    }

    pub fn state(&self) -> DraftState {
        if self.submitting {
            DraftState::Submitting
        } else if self.items.is_empty() {
            DraftState::Empty
        } else {
            DraftState::Building
        }
    }

    /// Append a line for `product_id × quantity`, capturing the catalog price now.
    pub fn add_item(
        &mut self,
        catalog: &Catalog,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<&LineItem, DraftError> {
        self.ensure_open()?;

        if !product_id.is_valid() {
            return Err(DraftError::MissingProduct);
        }
        if quantity <= 0 {
            return Err(DraftError::NonPositiveQuantity(quantity));
        }

        let product = catalog
            .get(product_id)
            .ok_or(DraftError::UnknownProduct(product_id))?;

        // Each line and the running total stay within `Money::MAX_EXACT`.
        let line_total = product
            .unit_price
            .checked_times(quantity)
            .filter(|total| total.is_wire_exact())
            .ok_or(DraftError::TotalOverflow(product_id))?;
        self.total()
            .checked_add(line_total)
            .filter(|total| total.is_wire_exact())
            .ok_or(DraftError::TotalOverflow(product_id))?;

        self.items.push(LineItem {
            product_id: product.id,
            name: product.name.clone(),
            quantity,
            unit_price: product.unit_price,
            line_total,
        });

        tracing::debug!(
            product_id = %product_id,
            quantity,
            lines = self.items.len(),
            "line added to draft"
        );

        Ok(&self.items[self.items.len() - 1])
    }

    /// Remove the line at `index`; later lines shift down by one.
    pub fn remove_item(&mut self, index: usize) -> Result<LineItem, DraftError> {
        self.ensure_open()?;

        if index >= self.items.len() {
            return Err(DraftError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }

        let removed = self.items.remove(index);
        tracing::debug!(index, lines = self.items.len(), "line removed from draft");
        Ok(removed)
    }

    /// Snapshot the payload for `user_id` and lock the draft.
    pub fn begin_submission(&mut self, user_id: UserId) -> Result<SalePayload, DraftError> {
        self.ensure_open()?;

        if self.items.is_empty() {
            return Err(DraftError::EmptyOrder);
        }

        self.submitting = true;
        Ok(SalePayload {
            user_id,
            items: self.items.clone(),
        })
    }

    /// The backend accepted the order: clear everything and unlock.
    pub fn complete_submission(&mut self) -> Result<(), DraftError> {
        self.ensure_submitting()?;
        self.items.clear();
        self.submitting = false;
        Ok(())
    }

    /// The backend rejected the order: unlock with the items untouched.
    pub fn abort_submission(&mut self) -> Result<(), DraftError> {
        self.ensure_submitting()?;
        self.submitting = false;
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), DraftError> {
        if self.submitting {
            return Err(DraftError::SubmissionInProgress);
        }
        Ok(())
    }

    fn ensure_submitting(&self) -> Result<(), DraftError> {
        if !self.submitting {
            return Err(DraftError::NotSubmitting);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use balcao_products::Product;

    fn pen() -> Product {
        Product::new(ProductId::new(1), "Caneta", Money::from_cents(250))
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            pen(),
            Product::new(ProductId::new(2), "Caderno", Money::from_cents(1290)),
        ])
    }

    fn user() -> UserId {
        UserId::new(7)
    }

    #[test]
    fn add_captures_catalog_price_and_totals() {
        let mut draft = OrderDraft::new();
        let line = draft.add_item(&catalog(), ProductId::new(1), 3).unwrap().clone();

        assert_eq!(line.name, "Caneta");
        assert_eq!(line.unit_price, Money::from_cents(250));
        assert_eq!(line.line_total, Money::from_cents(750));
        assert_eq!(draft.total().to_string(), "7.50");
        assert_eq!(draft.state(), DraftState::Building);
    }

    #[test]
    fn counter_scenario_add_add_remove() {
        let catalog = catalog();
        let mut draft = OrderDraft::new();

        draft.add_item(&catalog, ProductId::new(1), 3).unwrap();
        assert_eq!(draft.total().to_string(), "7.50");

        draft.add_item(&catalog, ProductId::new(1), 2).unwrap();
        assert_eq!(draft.len(), 2);
        assert_eq!(draft.total().to_string(), "12.50");

        draft.remove_item(0).unwrap();
        assert_eq!(draft.len(), 1);
        assert_eq!(draft.items()[0].quantity, 2);
        assert_eq!(draft.total().to_string(), "5.00");
    }

    #[test]
    fn later_price_changes_do_not_touch_existing_lines() {
        let mut draft = OrderDraft::new();
        draft.add_item(&catalog(), ProductId::new(1), 1).unwrap();

        let repriced = Catalog::new(vec![Product::new(ProductId::new(1), "Caneta", Money::from_cents(990))]);
        draft.add_item(&repriced, ProductId::new(1), 1).unwrap();

        assert_eq!(draft.items()[0].unit_price, Money::from_cents(250));
        assert_eq!(draft.items()[1].unit_price, Money::from_cents(990));
    }

    #[test]
    fn invalid_additions_leave_draft_unchanged() {
        let catalog = catalog();
        let mut draft = OrderDraft::new();
        draft.add_item(&catalog, ProductId::new(2), 1).unwrap();
        let before = draft.clone();

        assert_eq!(draft.add_item(&catalog, ProductId::new(0), 1).unwrap_err(), DraftError::MissingProduct);
        assert_eq!(
            draft.add_item(&catalog, ProductId::new(1), 0).unwrap_err(),
            DraftError::NonPositiveQuantity(0)
        );
        assert_eq!(
            draft.add_item(&catalog, ProductId::new(1), -4).unwrap_err(),
            DraftError::NonPositiveQuantity(-4)
        );
        assert_eq!(
            draft.add_item(&catalog, ProductId::new(99), 1).unwrap_err(),
            DraftError::UnknownProduct(ProductId::new(99))
        );

        assert_eq!(draft, before);
    }

    #[test]
    fn huge_quantities_are_refused_before_the_total_overflows() {
        let catalog = catalog();
        let mut draft = OrderDraft::new();

        assert_eq!(
            draft.add_item(&catalog, ProductId::new(1), 20_000_000_000_000_000).unwrap_err(),
            DraftError::TotalOverflow(ProductId::new(1))
        );
        assert!(draft.is_empty());

        draft.add_item(&catalog, ProductId::new(1), 4_000_000_000_000).unwrap();
        let before = draft.clone();

        assert_eq!(
            draft.add_item(&catalog, ProductId::new(1), 4_000_000_000_000).unwrap_err(),
            DraftError::TotalOverflow(ProductId::new(1))
        );
        assert_eq!(draft, before);
        assert_eq!(draft.total(), Money::from_cents(1_000_000_000_000_000));

        let payload = draft.begin_submission(user()).unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        let sent: Money = serde_json::from_value(value["itens"][0]["total"].clone()).unwrap();
        assert_eq!(sent, payload.total());
    }

    #[test]
    fn remove_out_of_bounds_is_an_index_error() {
        let mut draft = OrderDraft::new();
        draft.add_item(&catalog(), ProductId::new(1), 1).unwrap();

        assert_eq!(
            draft.remove_item(1).unwrap_err(),
            DraftError::IndexOutOfBounds { index: 1, len: 1 }
        );
        assert_eq!(draft.len(), 1);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let catalog = catalog();
        let mut draft = OrderDraft::new();
        for qty in 1..=4 {
            draft.add_item(&catalog, ProductId::new(1), qty).unwrap();
        }

        draft.remove_item(1).unwrap();

        let quantities: Vec<i64> = draft.items().iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![1, 3, 4]);
    }

    #[test]
    fn empty_draft_cannot_be_submitted() {
        let mut draft = OrderDraft::new();
        assert_eq!(draft.begin_submission(user()).unwrap_err(), DraftError::EmptyOrder);
        assert_eq!(draft.state(), DraftState::Empty);
    }

    #[test]
    fn submission_locks_the_draft() {
        let catalog = catalog();
        let mut draft = OrderDraft::new();
        draft.add_item(&catalog, ProductId::new(1), 2).unwrap();

        let payload = draft.begin_submission(user()).unwrap();
        assert_eq!(payload.user_id, user());
        assert_eq!(payload.items.len(), 1);
        assert_eq!(draft.state(), DraftState::Submitting);

        assert_eq!(
            draft.add_item(&catalog, ProductId::new(2), 1).unwrap_err(),
            DraftError::SubmissionInProgress
        );
        assert_eq!(draft.remove_item(0).unwrap_err(), DraftError::SubmissionInProgress);
        assert_eq!(draft.begin_submission(user()).unwrap_err(), DraftError::SubmissionInProgress);
        assert_eq!(draft.len(), 1);
    }

    #[test]
    fn completed_submission_clears_the_draft() {
        let mut draft = OrderDraft::new();
        draft.add_item(&catalog(), ProductId::new(1), 2).unwrap();
        draft.begin_submission(user()).unwrap();

        draft.complete_submission().unwrap();

        assert!(draft.is_empty());
        assert_eq!(draft.state(), DraftState::Empty);
    }

    #[test]
    fn aborted_submission_restores_identical_draft() {
        let catalog = catalog();
        let mut draft = OrderDraft::new();
        draft.add_item(&catalog, ProductId::new(1), 2).unwrap();
        draft.add_item(&catalog, ProductId::new(2), 1).unwrap();
        let before = draft.clone();

        draft.begin_submission(user()).unwrap();
        draft.abort_submission().unwrap();

        assert_eq!(draft, before);
        assert_eq!(draft.state(), DraftState::Building);
    }

    #[test]
    fn finishing_without_begin_is_rejected() {
        let mut draft = OrderDraft::new();
        assert_eq!(draft.complete_submission().unwrap_err(), DraftError::NotSubmitting);
        assert_eq!(draft.abort_submission().unwrap_err(), DraftError::NotSubmitting);
    }

    #[test]
    fn payload_wire_shape() {
        let mut draft = OrderDraft::new();
        draft.add_item(&catalog(), ProductId::new(1), 3).unwrap();
        let payload = draft.begin_submission(user()).unwrap();

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id_usuario": 7,
                "itens": [{"id": 1, "nome": "Caneta", "quantidade": 3, "preco": 2.5, "total": 7.5}]
            })
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: every valid add appends one line and the grand total is
            /// the sum of quantity × captured price.
            #[test]
            fn totals_match_captured_prices(
                adds in proptest::collection::vec((1i64..=2, 1i64..1_000), 0..40)
            ) {
                let catalog = catalog();
                let mut draft = OrderDraft::new();
                let mut expected = 0i64;

                for (id, qty) in &adds {
                    let price = catalog.get(ProductId::new(*id)).unwrap().unit_price.cents();
                    draft.add_item(&catalog, ProductId::new(*id), *qty).unwrap();
                    expected += price * qty;
                }

                prop_assert_eq!(draft.len(), adds.len());
                prop_assert_eq!(draft.total().cents(), expected);
            }

            /// Property: removing index i drops exactly that line and shifts the rest.
            #[test]
            fn remove_shifts_following_lines(
                quantities in proptest::collection::vec(1i64..100, 1..20),
                pick in any::<prop::sample::Index>()
            ) {
                let catalog = catalog();
                let mut draft = OrderDraft::new();
                for qty in &quantities {
                    draft.add_item(&catalog, ProductId::new(1), *qty).unwrap();
                }

                let index = pick.index(quantities.len());
                let removed = draft.remove_item(index).unwrap();

                let mut expected = quantities.clone();
                let gone = expected.remove(index);
                prop_assert_eq!(removed.quantity, gone);

                let actual: Vec<i64> = draft.items().iter().map(|i| i.quantity).collect();
                prop_assert_eq!(actual, expected);
            }
        }
    }
}
