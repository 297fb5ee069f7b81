// In memory implementation of the TransactionStore port.
//
// Responsibilities
// - Keep every transaction in a map keyed by its id for the lifetime of the process.
// - Replace records whole on write and hand out clones on read, so a reader
//   never sees a half written record.

use crate::modules::transactions::adapters::outbound::transaction_store::{
    StoreError, TransactionStore,
};
use crate::modules::transactions::core::transaction::Transaction;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTransactionStore {
    transactions: RwLock<HashMap<String, Transaction>>,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.transactions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.transactions.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn put(&self, transaction: Transaction) -> Result<(), StoreError> {
        let mut guard = self.transactions.write().await;
        guard.insert(transaction.id.clone(), transaction);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Transaction, StoreError> {
        self.transactions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
