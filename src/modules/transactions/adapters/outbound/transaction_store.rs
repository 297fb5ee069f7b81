use crate::modules::transactions::core::transaction::Transaction;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("transaction {0} not found")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Inserts the transaction, replacing whatever was stored under its id.
    async fn put(&self, transaction: Transaction) -> Result<(), StoreError>;

    async fn get(&self, id: &str) -> Result<Transaction, StoreError>;
}
