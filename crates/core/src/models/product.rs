use serde::{Deserialize, Serialize};

/// A catalog product with its current on-hand stock.
///
/// Field names follow Rust conventions; serde renames map onto the
/// backend's Portuguese wire format (`nome`, `estoque_atual`, ...).
/// Products are immutable during a render pass and replaced wholesale
/// on every reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend row id (autoincrement integer)
    pub id: i64,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "categoria")]
    pub category: String,

    #[serde(rename = "fornecedor")]
    pub supplier: String,

    /// Purchase cost per unit
    #[serde(rename = "custo")]
    pub unit_cost: f64,

    /// Sale price per unit
    #[serde(rename = "venda")]
    pub unit_price: f64,

    /// Minimum-stock threshold used for status classification
    #[serde(rename = "estoque_min")]
    pub min_stock: i64,

    /// On-hand quantity as the backend knows it *today*.
    /// Historical levels are reconstructed from this single field.
    #[serde(rename = "estoque_atual")]
    pub current_stock: i64,
}

/// Payload for registering a new product.
///
/// The backend expects a different field set than `Product`
/// (`compra`/`venda`/`min`/`atual` instead of the column names).
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "categoria")]
    pub category: String,

    #[serde(rename = "fornecedor")]
    pub supplier: String,

    #[serde(rename = "compra")]
    pub unit_cost: f64,

    #[serde(rename = "venda")]
    pub unit_price: f64,

    #[serde(rename = "min")]
    pub min_stock: i64,

    #[serde(rename = "atual")]
    pub initial_stock: i64,
}
