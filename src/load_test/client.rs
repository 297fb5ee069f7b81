use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::modules::transactions::core::transaction::Transaction;

#[derive(Debug, Error)]
pub enum LoadTestError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(StatusCode),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Thin HTTP client for the `/transactions` route.
#[derive(Debug, Clone)]
pub struct LoadTestClient {
    http: Client,
    url: String,
}

impl LoadTestClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            url: format!("{}/transactions", base_url.trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn post_transaction(&self, transaction: &Transaction) -> Result<(), LoadTestError> {
        let response = self.http.post(&self.url).json(transaction).send().await?;
        if response.status() != StatusCode::OK {
            tracing::warn!(status = %response.status(), "failed to post transaction");
            return Err(LoadTestError::Status(response.status()));
        }
        tracing::debug!(id = %transaction.id, "transaction posted");
        Ok(())
    }

    pub async fn get_transaction(&self, id: &str) -> Result<Transaction, LoadTestError> {
        let response = self
            .http
            .get(&self.url)
            .query(&[("id", id)])
            .send()
            .await?;
        if response.status() != StatusCode::OK {
            tracing::warn!(status = %response.status(), %id, "failed to get transaction");
            return Err(LoadTestError::Status(response.status()));
        }
        let bytes = response.bytes().await?;
        let transaction: Transaction =
            serde_json::from_slice(&bytes).map_err(|e| LoadTestError::Decode(e.to_string()))?;
        tracing::debug!(%id, "transaction retrieved");
        Ok(transaction)
    }
}
