use std::collections::HashMap;

use crate::models::inventory::Inventory;
use crate::models::month::MonthFilter;
use crate::models::report::InventorySummary;
use crate::models::snapshot::Snapshot;
use crate::models::transaction::Transaction;
use crate::services::stock_service::StockService;

/// Turns the raw collections into the snapshot list every page consumes.
///
/// Recomputed from scratch on every call — there is no cross-render cache.
/// Cost is O(products + transactions): movements are bucketed by product id
/// once, so each product's reconstruction only touches its own history.
pub struct SnapshotService {
    stock_service: StockService,
}

impl SnapshotService {
    pub fn new() -> Self {
        Self {
            stock_service: StockService::new(),
        }
    }

    /// Build one snapshot per product under the given filter.
    pub fn build_snapshots(&self, inventory: &Inventory, filter: MonthFilter) -> Vec<Snapshot> {
        let by_product = Self::index_by_product(&inventory.transactions);

        inventory
            .products
            .iter()
            .map(|product| {
                let transactions = by_product
                    .get(&product.id)
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                self.stock_service.snapshot(product, transactions, filter)
            })
            .collect()
    }

    /// KPI aggregates for the overview page.
    ///
    /// Derived from the exact snapshot list `build_snapshots` produces, so
    /// the totals always equal the sum of the per-row figures.
    pub fn summary(&self, inventory: &Inventory, filter: MonthFilter) -> InventorySummary {
        let snapshots = self.build_snapshots(inventory, filter);

        let total_items = snapshots.iter().map(|s| s.computed_stock).sum();
        let inventory_value = snapshots.iter().map(Snapshot::stock_value).sum();
        let critical_count = snapshots.iter().filter(|s| s.status.is_critical()).count();

        InventorySummary {
            period: filter.label(),
            product_count: snapshots.len(),
            total_items,
            inventory_value,
            critical_count,
        }
    }

    /// Case-insensitive search over product name and category,
    /// matching the overview table's search box behaviour.
    pub fn filter_snapshots(&self, snapshots: &[Snapshot], term: &str) -> Vec<Snapshot> {
        let term = term.to_lowercase();
        snapshots
            .iter()
            .filter(|s| {
                s.product.name.to_lowercase().contains(&term)
                    || s.product.category.to_lowercase().contains(&term)
            })
            .cloned()
            .collect()
    }

    fn index_by_product(transactions: &[Transaction]) -> HashMap<i64, Vec<&Transaction>> {
        let mut index: HashMap<i64, Vec<&Transaction>> = HashMap::new();
        for transaction in transactions {
            index.entry(transaction.product_id).or_default().push(transaction);
        }
        index
    }
}

impl Default for SnapshotService {
    fn default() -> Self {
        Self::new()
    }
}
