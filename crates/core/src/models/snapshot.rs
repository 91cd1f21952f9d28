use serde::{Deserialize, Serialize};

use super::product::Product;

/// Stock status of a product at the selected cutoff.
///
/// Ordered by severity; classification picks the first matching branch
/// (exhausted before critical before low).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    /// Quantity is exactly zero
    Exhausted,
    /// Below the minimum-stock threshold
    Critical,
    /// Below 1.5× the minimum-stock threshold
    Low,
    /// Comfortably stocked
    Normal,
}

impl StockStatus {
    /// Whether this status is severe enough to highlight the row.
    #[must_use]
    pub fn is_critical(&self) -> bool {
        matches!(self, StockStatus::Exhausted | StockStatus::Critical)
    }

    /// Display label for table badges.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Exhausted => "Exhausted",
            StockStatus::Critical => "Critical",
            StockStatus::Low => "Low",
            StockStatus::Normal => "Normal",
        }
    }

    /// CSS badge class consumed by the table renderer.
    #[must_use]
    pub fn severity_class(&self) -> &'static str {
        match self {
            StockStatus::Exhausted | StockStatus::Critical => "bg-danger",
            StockStatus::Low => "bg-warning",
            StockStatus::Normal => "bg-success",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A product's view-ready state for one render pass: the original product
/// fields plus the two computed attributes.
///
/// Never cached across renders — rebuilt from scratch every time the month
/// filter or the underlying collections change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The product as loaded from the backend
    pub product: Product,

    /// Stock level reconstructed as of the selected cutoff
    pub computed_stock: i64,

    /// Classification of `computed_stock` against the product's threshold
    pub status: StockStatus,
}

impl Snapshot {
    /// Monetary value of the reconstructed stock (quantity × unit cost).
    #[must_use]
    pub fn stock_value(&self) -> f64 {
        self.computed_stock as f64 * self.product.unit_cost
    }
}
