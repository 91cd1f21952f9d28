use crate::models::month::MonthFilter;
use crate::models::product::Product;
use crate::models::snapshot::{Snapshot, StockStatus};
use crate::models::transaction::{Transaction, TransactionKind};

/// Reconstructs historical stock levels and classifies them.
///
/// The backend persists only the *current* quantity per product, not a time
/// series. Any past month can still be inspected by undoing every movement
/// recorded after that month: a stock-in is reversed by subtraction, a
/// stock-out by addition. The reversal is a pure sum of signed effects, so
/// transaction order never matters.
///
/// Pure business logic — no I/O, no API calls. Easy to test.
pub struct StockService;

impl StockService {
    pub fn new() -> Self {
        Self
    }

    /// Reconstruct a product's stock level as of the end of the filter month.
    ///
    /// `transactions` must already be scoped to the product. With
    /// `AllPeriods` the current quantity is returned verbatim; with
    /// `Month(m)` every movement whose `month_index` is strictly greater
    /// than `m` is reverse-applied. The result is floored at zero.
    pub fn reconstruct(
        &self,
        current_stock: i64,
        transactions: &[&Transaction],
        filter: MonthFilter,
    ) -> i64 {
        let cutoff = match filter {
            MonthFilter::AllPeriods => return current_stock,
            MonthFilter::Month(m) => m,
        };

        let reversed: i64 = transactions
            .iter()
            .filter(|t| t.month_index > cutoff)
            .map(|t| match t.kind {
                TransactionKind::StockIn => -t.quantity,
                TransactionKind::StockOut => t.quantity,
            })
            .sum();

        let reconstructed = current_stock + reversed;
        if reconstructed < 0 {
            // Going negative means the movement history disagrees with the
            // stored current quantity. Clamp, but don't hide it.
            tracing::warn!(
                cutoff,
                reconstructed,
                "stock reconstruction went below zero — clamping to 0"
            );
            return 0;
        }
        reconstructed
    }

    /// Classify a (non-negative) quantity against a minimum-stock threshold.
    ///
    /// First match wins: exhausted before critical before low. A threshold
    /// of zero degenerates to Exhausted/Normal only.
    pub fn classify(&self, quantity: i64, min_stock: i64) -> StockStatus {
        if quantity == 0 {
            StockStatus::Exhausted
        } else if quantity < min_stock {
            StockStatus::Critical
        } else if (quantity as f64) < min_stock as f64 * 1.5 {
            StockStatus::Low
        } else {
            StockStatus::Normal
        }
    }

    /// Build the view-ready snapshot for one product: reconstructed stock
    /// plus its classification, merged with the original product fields.
    pub fn snapshot(
        &self,
        product: &Product,
        transactions: &[&Transaction],
        filter: MonthFilter,
    ) -> Snapshot {
        let computed_stock = self.reconstruct(product.current_stock, transactions, filter);
        let status = self.classify(computed_stock, product.min_stock);
        Snapshot {
            product: product.clone(),
            computed_stock,
            status,
        }
    }
}

impl Default for StockService {
    fn default() -> Self {
        Self::new()
    }
}
