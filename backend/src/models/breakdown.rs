//! Line items and cost categories
//!
//! A category total is always derived from its line items, summed in
//! insertion order. There is no way to set a total directly, which is also
//! why `CategoryBreakdown` is serialize-only.

use serde::{Deserialize, Serialize};

/// Single named cost contributor (USD per month)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount: f64,
}

impl LineItem {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Named group of line items with a derived total
///
/// # Example
/// ```
/// use kodiak_cost_core::CategoryBreakdown;
///
/// let infra = CategoryBreakdown::new("Infrastructure")
///     .with_item("compute", 18.0)
///     .with_item("database", 12.0);
/// assert_eq!(infra.total(), 30.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    name: String,
    items: Vec<LineItem>,
    total: f64,
}

impl CategoryBreakdown {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            total: 0.0,
        }
    }

    /// Append a line item; items keep insertion order
    pub fn with_item(mut self, label: impl Into<String>, amount: f64) -> Self {
        self.push(label, amount);
        self
    }

    pub fn push(&mut self, label: impl Into<String>, amount: f64) {
        self.items.push(LineItem::new(label, amount));
        self.total = sum_amounts(&self.items);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Amount of the first line item with `label`
    pub fn amount(&self, label: &str) -> Option<f64> {
        self.items
            .iter()
            .find(|item| item.label == label)
            .map(|item| item.amount)
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

/// Sum in slice order, starting from zero
pub(crate) fn sum_amounts(items: &[LineItem]) -> f64 {
    items.iter().fold(0.0, |acc, item| acc + item.amount)
}
