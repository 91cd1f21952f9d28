use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::product::{NewProduct, Product};
use crate::models::transaction::{MovementRequest, Transaction};

/// Trait abstraction for the inventory backend (SOLID: Dependency Inversion).
///
/// The REST client implements this against the real HTTP API; tests swap in
/// an in-memory mock. If the backend's transport ever changes, only the one
/// implementation is replaced — the rest of the codebase is untouched.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait InventoryApi: Send + Sync {
    /// Human-readable name of this backend (for logs/errors).
    fn name(&self) -> &str;

    /// Bulk-load the product catalog.
    async fn fetch_products(&self) -> Result<Vec<Product>, CoreError>;

    /// Bulk-load the full movement history.
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, CoreError>;

    /// Register a new product. A backend-side validation failure surfaces
    /// as `CoreError::Rejected`.
    async fn create_product(&self, product: &NewProduct) -> Result<(), CoreError>;

    /// Record a stock movement against an existing product.
    async fn record_movement(&self, movement: &MovementRequest) -> Result<(), CoreError>;

    /// Delete a product and its movement history.
    async fn delete_product(&self, product_id: i64) -> Result<(), CoreError>;
}
