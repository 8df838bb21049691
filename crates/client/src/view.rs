//! Renderers: pure functions from state to display output.
//!
//! Every call produces the complete output for its region; callers replace
//! what they showed before instead of patching it.

use std::fmt::Write as _;

use serde::Serialize;

use balcao_core::Money;
use balcao_products::{Catalog, Product};
use balcao_sales::{LineItem, OrderDraft};

use crate::types::User;

pub const CURRENCY: &str = "R$";
pub const PRODUCT_PLACEHOLDER: &str = "Select a product";

/// `R$ 7.50`
pub fn format_price(amount: Money) -> String {
    format!("{CURRENCY} {amount}")
}

/// Minimal HTML text escaping for values interpolated into markup.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Product selector
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Empty for the placeholder, the product id otherwise.
    pub value: String,
    pub label: String,
}

/// Placeholder followed by one `"name — R$ price"` option per product.
pub fn catalog_options(catalog: &Catalog) -> Vec<SelectOption> {
    let mut options = Vec::with_capacity(catalog.len() + 1);
    options.push(SelectOption {
        value: String::new(),
        label: PRODUCT_PLACEHOLDER.to_string(),
    });
    options.extend(catalog.iter().map(|p| SelectOption {
        value: p.id.to_string(),
        label: format!("{} — {}", p.name, format_price(p.unit_price)),
    }));
    options
}

pub fn options_html(options: &[SelectOption]) -> String {
    options
        .iter()
        .map(|o| {
            format!(
                r#"<option value="{}">{}</option>"#,
                escape_html(&o.value),
                escape_html(&o.label)
            )
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Order draft
// ─────────────────────────────────────────────────────────────────────────────

/// One rendered draft line; `index` is the line's current position and is
/// what the removal control hands back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRow {
    pub index: usize,
    pub name: String,
    pub quantity: i64,
    pub unit_price: String,
    pub line_total: String,
}

impl OrderRow {
    fn from_item(index: usize, item: &LineItem) -> Self {
        Self {
            index,
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: format_price(item.unit_price),
            line_total: format_price(item.line_total),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><button class="btn danger" data-index="{}">Remove</button></td></tr>"#,
            escape_html(&self.name),
            self.quantity,
            self.unit_price,
            self.line_total,
            self.index
        )
    }
}

/// Full view of a draft: rows in insertion order plus the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
    pub rows: Vec<OrderRow>,
    /// Grand total with two decimals and no currency prefix (`"12.50"`).
    pub total: String,
}

impl OrderView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Table body markup.
    pub fn rows_html(&self) -> String {
        self.rows.iter().map(OrderRow::to_html).collect()
    }

    /// Plain-text table for terminals.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if self.rows.is_empty() {
            out.push_str("  (no items)\n");
        } else {
            let _ = writeln!(
                out,
                "{:>3}  {:<28} {:>5} {:>12} {:>12}",
                "#", "product", "qty", "unit", "total"
            );
            for row in &self.rows {
                let _ = writeln!(
                    out,
                    "{:>3}  {:<28} {:>5} {:>12} {:>12}",
                    row.index, row.name, row.quantity, row.unit_price, row.line_total
                );
            }
        }
        let _ = writeln!(out, "Total: {CURRENCY} {}", self.total);
        out
    }
}

pub fn render_order(draft: &OrderDraft) -> OrderView {
    OrderView {
        rows: draft
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| OrderRow::from_item(index, item))
            .collect(),
        total: draft.total().to_string(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Management tables
// ─────────────────────────────────────────────────────────────────────────────

/// `id | name | category | price`, or a single "no products" row.
pub fn products_table_html(products: &[Product]) -> String {
    if products.is_empty() {
        return "<tr><td colspan='4'>No products found.</td></tr>".to_string();
    }

    products
        .iter()
        .map(|p| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                p.id,
                escape_html(&p.name),
                escape_html(p.category.as_deref().unwrap_or("")),
                p.unit_price
            )
        })
        .collect()
}

pub fn products_table_text(products: &[Product]) -> String {
    if products.is_empty() {
        return "  (no products found)\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:>5}  {:<28} {:<16} {:>10}", "id", "name", "category", "price");
    for p in products {
        let _ = writeln!(
            out,
            "{:>5}  {:<28} {:<16} {:>10}",
            p.id,
            p.name,
            p.category.as_deref().unwrap_or("-"),
            p.unit_price
        );
    }
    out
}

/// `name | e-mail | group | delete control`, or a single "no users" row.
pub fn users_table_html(users: &[User]) -> String {
    if users.is_empty() {
        return "<tr><td colspan='4'>No users found.</td></tr>".to_string();
    }

    users
        .iter()
        .map(|u| {
            format!(
                r#"<tr><td>{}</td><td>{}</td><td>{}</td><td><button class="btn small danger" data-id="{}">Delete</button></td></tr>"#,
                escape_html(&u.name),
                escape_html(&u.email),
                u.group_id,
                u.id
            )
        })
        .collect()
}

pub fn users_table_text(users: &[User]) -> String {
    if users.is_empty() {
        return "  (no users found)\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:>5}  {:<24} {:<32} {:>5}", "id", "name", "e-mail", "group");
    for u in users {
        let _ = writeln!(out, "{:>5}  {:<24} {:<32} {:>5}", u.id, u.name, u.email, u.group_id);
    }
    out
}
