// Composition root for the transactions service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory transaction store.
// - Wire it into the HTTP router and serve it.

pub mod config;
pub mod http;
pub mod state;

use crate::modules::transactions::adapters::outbound::transaction_store_in_memory::InMemoryTransactionStore;
use crate::shell::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed when several binaries or tests share a process.
    let _ = fmt().with_env_filter(filter).try_init();
}

pub async fn app_state(store: Arc<InMemoryTransactionStore>) -> AppState {
    tracing::info!(
        transactions = store.len().await,
        empty = store.is_empty().await,
        "transaction store ready"
    );
    AppState::new(store)
}

/// Serves the transactions router on an already bound listener until the task is dropped.
pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    axum::serve(listener, http::router(state)).await?;
    Ok(())
}
