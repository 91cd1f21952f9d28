use serde::{Deserialize, Serialize};

use super::product::Product;
use super::transaction::Transaction;

/// The in-memory session state: both backend collections, loaded wholesale.
///
/// Pure data holder — no mutation logic lives here. After a successful bulk
/// load the whole struct is replaced in a single assignment, so renderers
/// never observe a partially updated state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    /// Product catalog with current stock levels
    pub products: Vec<Product>,

    /// Full movement history, month-indexed
    pub transactions: Vec<Transaction>,
}

impl Inventory {
    pub fn new(products: Vec<Product>, transactions: Vec<Transaction>) -> Self {
        Self {
            products,
            transactions,
        }
    }
}
