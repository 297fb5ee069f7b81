use crate::modules::transactions::adapters::outbound::transaction_store::TransactionStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub transactions: Arc<dyn TransactionStore + Send + Sync>,
}

impl AppState {
    pub fn new(transactions: Arc<dyn TransactionStore + Send + Sync>) -> Self {
        Self { transactions }
    }
}
