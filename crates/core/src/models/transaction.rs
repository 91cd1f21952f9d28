use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Goods received — increases on-hand stock
    #[serde(rename = "entrada")]
    StockIn,
    /// Goods sold / dispatched — decreases on-hand stock
    #[serde(rename = "saida")]
    StockOut,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::StockIn => write!(f, "StockIn"),
            TransactionKind::StockOut => write!(f, "StockOut"),
        }
    }
}

/// A single stock movement, as recorded by the backend.
///
/// Transactions are immutable once loaded. The client never mutates them;
/// new movements are written through the API and the whole collection is
/// refetched. `product_name` and `category` are denormalized at write time
/// so views don't need a product join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Backend row id
    pub id: i64,

    #[serde(rename = "produto_id")]
    pub product_id: i64,

    #[serde(rename = "produto_nome")]
    pub product_name: String,

    #[serde(rename = "categoria")]
    pub category: String,

    #[serde(rename = "tipo")]
    pub kind: TransactionKind,

    /// Units moved (always positive; the sign lives in `kind`)
    #[serde(rename = "quantidade")]
    pub quantity: i64,

    /// Movement date, `dd/mm/YYYY` on the wire
    #[serde(rename = "data_movimento", with = "br_date")]
    pub moved_at: NaiveDate,

    /// Month of `moved_at`, 0-based (0 = January).
    /// Precomputed by the backend; must agree with `moved_at`.
    #[serde(rename = "mes_index")]
    pub month_index: u32,

    /// Free-text reason ("Venda balcão", "Reposição", ...)
    #[serde(rename = "motivo")]
    pub reason: String,

    /// Monetary value of the movement: quantity × unit cost for stock-in,
    /// quantity × sale price for stock-out.
    #[serde(rename = "valor_total")]
    pub total_value: f64,
}

/// Payload for recording a stock movement against a product.
#[derive(Debug, Clone, Serialize)]
pub struct MovementRequest {
    #[serde(rename = "id")]
    pub product_id: i64,

    #[serde(rename = "tipo")]
    pub kind: TransactionKind,

    #[serde(rename = "qtd")]
    pub quantity: i64,

    #[serde(rename = "motivo")]
    pub reason: String,
}

/// Serde adapter for the backend's `dd/mm/YYYY` date strings.
pub mod br_date {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%d/%m/%Y";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
