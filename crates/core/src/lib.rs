pub mod api;
pub mod errors;
pub mod models;
pub mod services;

use chrono::NaiveDate;

use api::rest::RestApi;
use api::traits::InventoryApi;
use errors::CoreError;
use models::inventory::Inventory;
use models::month::MonthFilter;
use models::product::{NewProduct, Product};
use models::report::{CashFlow, CategoryRevenue, CategorySales, InventorySummary, PurchaseRow};
use models::snapshot::Snapshot;
use models::transaction::{MovementRequest, Transaction, TransactionKind};
use services::category_service::CategoryService;
use services::report_service::ReportService;
use services::snapshot_service::SnapshotService;

/// Main entry point for the Stock Control core library.
///
/// Holds the in-memory session state (products, transactions, the active
/// month filter) and the services that derive every view from it. All
/// derived data is recomputed from the full snapshot on demand; the only
/// asynchronous boundary is the backend API.
#[must_use]
pub struct StockControl {
    inventory: Inventory,
    month_filter: MonthFilter,
    api: Box<dyn InventoryApi>,
    snapshot_service: SnapshotService,
    category_service: CategoryService,
    report_service: ReportService,
}

impl std::fmt::Debug for StockControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockControl")
            .field("products", &self.inventory.products.len())
            .field("transactions", &self.inventory.transactions.len())
            .field("month_filter", &self.month_filter)
            .field("api", &self.api.name())
            .finish()
    }
}

impl StockControl {
    /// Create a dashboard session talking to the given backend.
    /// State starts empty; call [`refresh`](Self::refresh) to bulk-load.
    pub fn new(api: Box<dyn InventoryApi>) -> Self {
        Self {
            inventory: Inventory::default(),
            month_filter: MonthFilter::AllPeriods,
            api,
            snapshot_service: SnapshotService::new(),
            category_service: CategoryService::new(),
            report_service: ReportService::new(),
        }
    }

    /// Convenience constructor wiring up the REST client.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(Box::new(RestApi::new(base_url)))
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Bulk-load both collections from the backend and replace the local
    /// state wholesale.
    ///
    /// Both fetches must succeed before anything is assigned: a failed load
    /// leaves the previous state untouched, so renderers never see a torn
    /// half-update.
    pub async fn refresh(&mut self) -> Result<(), CoreError> {
        let products = self.api.fetch_products().await?;
        let transactions = self.api.fetch_transactions().await?;

        tracing::info!(
            products = products.len(),
            transactions = transactions.len(),
            "inventory reloaded"
        );

        self.inventory = Inventory::new(products, transactions);
        Ok(())
    }

    // ── Month Filter ────────────────────────────────────────────────

    /// Select the reporting period every derived computation uses.
    pub fn set_month_filter(&mut self, filter: MonthFilter) {
        self.month_filter = filter;
    }

    #[must_use]
    pub fn month_filter(&self) -> MonthFilter {
        self.month_filter
    }

    /// Label of the active period, for page headers.
    #[must_use]
    pub fn period_label(&self) -> String {
        self.month_filter.label()
    }

    // ── Derived State ───────────────────────────────────────────────

    /// One snapshot per product under the active filter — the row source
    /// for the overview table.
    #[must_use]
    pub fn snapshots(&self) -> Vec<Snapshot> {
        self.snapshot_service
            .build_snapshots(&self.inventory, self.month_filter)
    }

    /// Snapshots filtered by the search box term (name or category,
    /// case-insensitive).
    #[must_use]
    pub fn search_snapshots(&self, term: &str) -> Vec<Snapshot> {
        let snapshots = self.snapshots();
        self.snapshot_service.filter_snapshots(&snapshots, term)
    }

    /// KPI aggregates, derived from the same snapshot list as the rows.
    #[must_use]
    pub fn summary(&self) -> InventorySummary {
        self.snapshot_service
            .summary(&self.inventory, self.month_filter)
    }

    /// Per-product sales aggregation for one category's detail page.
    #[must_use]
    pub fn category_sales(&self, category: &str) -> CategorySales {
        self.category_service
            .category_sales(&self.inventory.transactions, category)
    }

    /// Stock-in spend vs stock-out revenue under the active filter.
    #[must_use]
    pub fn cash_flow(&self) -> CashFlow {
        self.report_service
            .cash_flow(&self.inventory.transactions, self.month_filter)
    }

    /// Stock-out revenue per category under the active filter.
    #[must_use]
    pub fn revenue_by_category(&self) -> Vec<CategoryRevenue> {
        self.report_service
            .revenue_by_category(&self.inventory.transactions, self.month_filter)
    }

    /// Purchase rows (all stock-in movements) with a delivery status
    /// relative to `today`.
    #[must_use]
    pub fn purchases(&self, today: NaiveDate) -> Vec<PurchaseRow> {
        self.report_service
            .purchases(&self.inventory.transactions, today)
    }

    /// Stock-out movements under the active filter, for the sales report.
    #[must_use]
    pub fn sales_report(&self) -> Vec<Transaction> {
        self.report_service
            .sales_report(&self.inventory.transactions, self.month_filter)
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.inventory.products
    }

    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.inventory.transactions
    }

    #[must_use]
    pub fn find_product(&self, product_id: i64) -> Option<&Product> {
        self.inventory.products.iter().find(|p| p.id == product_id)
    }

    #[must_use]
    pub fn product_count(&self) -> usize {
        self.inventory.products.len()
    }

    // ── Writes ──────────────────────────────────────────────────────
    //
    // Every successful write is followed by a full reload of both
    // collections — the backend owns all stock arithmetic, the client
    // never patches its state incrementally. A rejected write
    // (CoreError::Rejected) returns without reloading.

    /// Register a new product, then refetch.
    pub async fn create_product(&mut self, product: NewProduct) -> Result<(), CoreError> {
        if product.name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Product name must not be empty".into(),
            ));
        }

        self.api.create_product(&product).await?;
        self.refresh().await
    }

    /// Record a stock movement against an existing product, then refetch.
    pub async fn record_movement(
        &mut self,
        product_id: i64,
        kind: TransactionKind,
        quantity: i64,
        reason: impl Into<String>,
    ) -> Result<(), CoreError> {
        if quantity <= 0 {
            return Err(CoreError::ValidationError(
                "Movement quantity must be positive".into(),
            ));
        }
        if self.find_product(product_id).is_none() {
            return Err(CoreError::ProductNotFound(product_id));
        }

        let movement = MovementRequest {
            product_id,
            kind,
            quantity,
            reason: reason.into(),
        };
        self.api.record_movement(&movement).await?;
        self.refresh().await
    }

    /// Delete a product and its movement history, then refetch.
    pub async fn delete_product(&mut self, product_id: i64) -> Result<(), CoreError> {
        self.api.delete_product(product_id).await?;
        self.refresh().await
    }
}
