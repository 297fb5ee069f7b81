use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;

use transactions::modules::transactions::adapters::outbound::transaction_store_in_memory::InMemoryTransactionStore;
use transactions::shell::config::AppConfig;
use transactions::shell::{app_state, init_tracing, serve};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    init_tracing(&config.log_level);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server listening on http://{}/transactions", addr);

    let state = app_state(Arc::new(InMemoryTransactionStore::new())).await;
    serve(listener, state).await
}
