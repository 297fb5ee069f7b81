use rstest::rstest;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::load_test::client::{LoadTestClient, LoadTestError};
use crate::load_test::mocked_data::{MOCKED_TRANSACTION_ID, mocked_transaction};
use crate::load_test::runner::{LoadTestConfig, run_load_test};
use crate::modules::transactions::adapters::outbound::transaction_store::TransactionStore;
use crate::modules::transactions::adapters::outbound::transaction_store_in_memory::InMemoryTransactionStore;
use crate::shell::serve;
use crate::shell::state::AppState;

async fn spawn_server(store: Arc<InMemoryTransactionStore>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, AppState::new(store)));
    format!("http://{addr}")
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn load_test_against_a_live_server_reports_only_successes() {
    let store = Arc::new(InMemoryTransactionStore::new());
    let base_url = spawn_server(store.clone()).await;

    let report = run_load_test(
        LoadTestClient::new(&base_url),
        mocked_transaction(),
        LoadTestConfig {
            calls: 20,
            workers: 4,
        },
    )
    .await;

    assert_eq!(report.successes, 40);
    assert_eq!(report.errors, 0);
    assert_eq!(store.len().await, 1);
    assert_eq!(
        store.get(MOCKED_TRANSACTION_ID).await.unwrap(),
        mocked_transaction()
    );
}

#[rstest]
#[tokio::test]
async fn client_round_trips_and_surfaces_the_not_found_status() {
    let base_url = spawn_server(Arc::new(InMemoryTransactionStore::new())).await;
    let client = LoadTestClient::new(&base_url);

    let missing = client.get_transaction("UNKNOWN").await;
    assert!(matches!(
        missing,
        Err(LoadTestError::Status(status)) if status == reqwest::StatusCode::BAD_REQUEST
    ));

    client.post_transaction(&mocked_transaction()).await.unwrap();
    let read = client.get_transaction(MOCKED_TRANSACTION_ID).await.unwrap();
    assert_eq!(read, mocked_transaction());
}

#[rstest]
#[tokio::test]
async fn load_test_against_a_closed_port_reports_only_errors() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let report = run_load_test(
        LoadTestClient::new(&format!("http://{addr}")),
        mocked_transaction(),
        LoadTestConfig {
            calls: 4,
            workers: 2,
        },
    )
    .await;

    assert_eq!(report.successes, 0);
    assert_eq!(report.errors, 8);
}
