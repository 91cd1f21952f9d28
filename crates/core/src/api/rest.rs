use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::product::{NewProduct, Product};
use crate::models::transaction::{MovementRequest, Transaction};

use super::traits::InventoryApi;

/// REST client for the stock-control backend.
///
/// Endpoints (JSON bodies):
/// - `GET  {base}/api/produtos` — product catalog
/// - `GET  {base}/api/transacoes` — movement history
/// - `POST {base}/api/novo_produto` — register a product
/// - `POST {base}/api/transacao` — record a movement
/// - `DELETE {base}/api/produto/{id}` — delete a product
///
/// Write endpoints answer `{"success": bool, "error": string?}` and pair
/// `success: false` with a 4xx status, so the body is parsed regardless of
/// the status code.
pub struct RestApi {
    client: Client,
    base_url: String,
}

impl RestApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Interpret a write acknowledgement: `success: false` becomes
    /// `CoreError::Rejected` carrying the backend's message.
    fn check_ack(ack: WriteAck) -> Result<(), CoreError> {
        if ack.success {
            Ok(())
        } else {
            Err(CoreError::Rejected(
                ack.error.unwrap_or_else(|| "unknown backend error".to_string()),
            ))
        }
    }
}

// ── Backend response types ──────────────────────────────────────────

#[derive(Deserialize)]
struct WriteAck {
    success: bool,
    error: Option<String>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl InventoryApi for RestApi {
    fn name(&self) -> &str {
        "RestApi"
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, CoreError> {
        let url = format!("{}/api/produtos", self.base_url);
        let products: Vec<Product> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                endpoint: "/api/produtos".into(),
                message: format!("Failed to parse product list: {e}"),
            })?;
        Ok(products)
    }

    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        let url = format!("{}/api/transacoes", self.base_url);
        let transactions: Vec<Transaction> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                endpoint: "/api/transacoes".into(),
                message: format!("Failed to parse transaction list: {e}"),
            })?;
        Ok(transactions)
    }

    async fn create_product(&self, product: &NewProduct) -> Result<(), CoreError> {
        let url = format!("{}/api/novo_produto", self.base_url);
        let ack: WriteAck = self
            .client
            .post(&url)
            .json(product)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                endpoint: "/api/novo_produto".into(),
                message: format!("Failed to parse write acknowledgement: {e}"),
            })?;
        Self::check_ack(ack)
    }

    async fn record_movement(&self, movement: &MovementRequest) -> Result<(), CoreError> {
        let url = format!("{}/api/transacao", self.base_url);
        let ack: WriteAck = self
            .client
            .post(&url)
            .json(movement)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                endpoint: "/api/transacao".into(),
                message: format!("Failed to parse write acknowledgement: {e}"),
            })?;
        Self::check_ack(ack)
    }

    async fn delete_product(&self, product_id: i64) -> Result<(), CoreError> {
        let url = format!("{}/api/produto/{product_id}", self.base_url);
        let ack: WriteAck = self
            .client
            .delete(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                endpoint: "/api/produto/{id}".into(),
                message: format!("Failed to parse write acknowledgement: {e}"),
            })?;
        Self::check_ack(ack)
    }
}
