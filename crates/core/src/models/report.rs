use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// KPI aggregates for the overview page, derived from the same snapshot
/// list that feeds the table rows — so the two can never drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventorySummary {
    /// Label of the filter these figures were computed under
    pub period: String,

    /// Number of products in the catalog
    pub product_count: usize,

    /// Sum of reconstructed quantities across all products
    pub total_items: i64,

    /// Sum of (reconstructed quantity × unit cost)
    pub inventory_value: f64,

    /// How many products are flagged critical (Exhausted or Critical)
    pub critical_count: usize,
}

/// Sales aggregate for one product within a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    pub product_id: i64,
    pub product_name: String,

    /// Total units sold (sum over the category's stock-out movements)
    pub quantity: i64,

    /// Total revenue (sum of movement values)
    pub revenue: f64,
}

/// Aggregated sales picture for a single category.
///
/// `by_quantity` and `by_revenue` are two independent descending orderings
/// over the same per-product aggregates; `top_product` is the first entry
/// of `by_revenue`, absent when the category has no stock-out movements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySales {
    pub category: String,
    pub total_quantity: i64,
    pub total_revenue: f64,
    pub top_product: Option<ProductSales>,
    pub by_quantity: Vec<ProductSales>,
    pub by_revenue: Vec<ProductSales>,
}

/// Money in vs money out under the selected filter — the flow bar chart feed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Total spent on stock-in movements (purchases)
    pub stock_in_value: f64,

    /// Total earned from stock-out movements (sales)
    pub stock_out_value: f64,
}

/// Revenue total for one category — the doughnut chart feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: f64,
}

/// Delivery state of a purchase, inferred from elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    /// More than `RECEIVED_AFTER_DAYS` have passed since the movement
    Received,
    /// Recent purchase, assumed still on its way
    InTransit,
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryStatus::Received => write!(f, "Received"),
            DeliveryStatus::InTransit => write!(f, "In transit"),
        }
    }
}

/// A stock-in movement dressed up for the purchases page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRow {
    pub transaction: Transaction,
    pub ordered_on: NaiveDate,
    pub status: DeliveryStatus,
}
