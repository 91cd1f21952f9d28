use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::month::MonthFilter;
use crate::models::report::{CashFlow, CategoryRevenue, DeliveryStatus, PurchaseRow};
use crate::models::transaction::{Transaction, TransactionKind};

/// Purchases are assumed delivered this many days after the movement date.
const RECEIVED_AFTER_DAYS: i64 = 5;

/// Derives the chart and report feeds from the transaction history.
///
/// The core computes all the numbers — the frontend only renders.
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    /// Money spent on stock-in vs money earned from stock-out,
    /// restricted to the filter month. Feeds the flow bar chart.
    pub fn cash_flow(&self, transactions: &[Transaction], filter: MonthFilter) -> CashFlow {
        let mut flow = CashFlow {
            stock_in_value: 0.0,
            stock_out_value: 0.0,
        };

        for t in transactions {
            if !filter.matches(t.month_index) {
                continue;
            }
            match t.kind {
                TransactionKind::StockIn => flow.stock_in_value += t.total_value,
                TransactionKind::StockOut => flow.stock_out_value += t.total_value,
            }
        }
        flow
    }

    /// Stock-out revenue grouped by category under the filter,
    /// sorted descending by revenue. Feeds the category doughnut.
    pub fn revenue_by_category(
        &self,
        transactions: &[Transaction],
        filter: MonthFilter,
    ) -> Vec<CategoryRevenue> {
        let mut totals: HashMap<String, f64> = HashMap::new();

        for t in transactions {
            if t.kind != TransactionKind::StockOut || !filter.matches(t.month_index) {
                continue;
            }
            *totals.entry(t.category.clone()).or_insert(0.0) += t.total_value;
        }

        let mut breakdown: Vec<CategoryRevenue> = totals
            .into_iter()
            .map(|(category, revenue)| CategoryRevenue { category, revenue })
            .collect();
        breakdown.sort_by(|a, b| {
            b.revenue
                .partial_cmp(&a.revenue)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        breakdown
    }

    /// All stock-in movements as purchase rows, with a delivery status
    /// inferred from how long ago the movement happened.
    pub fn purchases(&self, transactions: &[Transaction], today: NaiveDate) -> Vec<PurchaseRow> {
        transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::StockIn)
            .map(|t| {
                let elapsed = (today - t.moved_at).num_days();
                let status = if elapsed > RECEIVED_AFTER_DAYS {
                    DeliveryStatus::Received
                } else {
                    DeliveryStatus::InTransit
                };
                PurchaseRow {
                    transaction: t.clone(),
                    ordered_on: t.moved_at,
                    status,
                }
            })
            .collect()
    }

    /// Stock-out movements under the filter, for the sales report table.
    pub fn sales_report(
        &self,
        transactions: &[Transaction],
        filter: MonthFilter,
    ) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::StockOut && filter.matches(t.month_index))
            .cloned()
            .collect()
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new()
    }
}
