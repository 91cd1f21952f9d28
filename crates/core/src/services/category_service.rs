use std::collections::HashMap;

use crate::models::report::{CategorySales, ProductSales};
use crate::models::transaction::{Transaction, TransactionKind};

/// Aggregates a category's sales for the category-detail page.
///
/// Only stock-out movements count as sales; stock-in is purchasing and is
/// reported elsewhere. Rankings are two independent descending sorts over
/// the same per-product aggregates.
pub struct CategoryService;

impl CategoryService {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate all stock-out movements of `category` by product.
    pub fn category_sales(&self, transactions: &[Transaction], category: &str) -> CategorySales {
        let mut stats: HashMap<i64, ProductSales> = HashMap::new();

        for t in transactions {
            if t.category != category || t.kind != TransactionKind::StockOut {
                continue;
            }
            let entry = stats.entry(t.product_id).or_insert_with(|| ProductSales {
                product_id: t.product_id,
                product_name: t.product_name.clone(),
                quantity: 0,
                revenue: 0.0,
            });
            entry.quantity += t.quantity;
            entry.revenue += t.total_value;
        }

        let products: Vec<ProductSales> = stats.into_values().collect();

        let total_quantity = products.iter().map(|p| p.quantity).sum();
        let total_revenue = products.iter().map(|p| p.revenue).sum();

        let mut by_quantity = products.clone();
        by_quantity.sort_by(|a, b| b.quantity.cmp(&a.quantity));

        let mut by_revenue = products;
        by_revenue.sort_by(|a, b| {
            b.revenue
                .partial_cmp(&a.revenue)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let top_product = by_revenue.first().cloned();

        CategorySales {
            category: category.to_string(),
            total_quantity,
            total_revenue,
            top_product,
            by_quantity,
            by_revenue,
        }
    }
}

impl Default for CategoryService {
    fn default() -> Self {
        Self::new()
    }
}
