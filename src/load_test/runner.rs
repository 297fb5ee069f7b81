// Concurrent POST/GET driver for a running transactions service.
//
// Each worker posts the same transaction and reads it back in a loop. Every
// call that answers 200 (and, for reads, decodes) counts as a success;
// anything else, transport failures included, counts as an error.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use crate::load_test::client::LoadTestClient;
use crate::modules::transactions::core::transaction::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTestConfig {
    /// Total POST/GET pairs, split evenly across workers.
    pub calls: usize,
    pub workers: usize,
}

impl Default for LoadTestConfig {
    fn default() -> Self {
        Self {
            calls: 1000,
            workers: 5,
        }
    }
}

impl LoadTestConfig {
    pub fn calls_per_worker(&self) -> usize {
        self.calls / self.workers.max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTestReport {
    pub single_post: Duration,
    pub single_get: Duration,
    pub total: Duration,
    pub successes: usize,
    pub errors: usize,
}

#[derive(Default)]
struct Tally {
    successes: AtomicUsize,
    errors: AtomicUsize,
}

impl Tally {
    fn record<T, E>(&self, result: &Result<T, E>) {
        let counter = if result.is_ok() {
            &self.successes
        } else {
            &self.errors
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

pub async fn run_load_test(
    client: LoadTestClient,
    transaction: Transaction,
    config: LoadTestConfig,
) -> LoadTestReport {
    // The warm-up pair is timed but left out of the tally.
    let start = Instant::now();
    if let Err(e) = client.post_transaction(&transaction).await {
        tracing::warn!(error = %e, "single POST failed");
    }
    let single_post = start.elapsed();

    let start = Instant::now();
    if let Err(e) = client.get_transaction(&transaction.id).await {
        tracing::warn!(error = %e, "single GET failed");
    }
    let single_get = start.elapsed();

    let tally = Arc::new(Tally::default());
    let per_worker = config.calls_per_worker();
    let start = Instant::now();

    let workers: Vec<_> = (0..config.workers)
        .map(|_| {
            let client = client.clone();
            let transaction = transaction.clone();
            let tally = tally.clone();
            tokio::spawn(async move {
                for _ in 0..per_worker {
                    tally.record(&client.post_transaction(&transaction).await);
                    tally.record(&client.get_transaction(&transaction.id).await);
                }
            })
        })
        .collect();

    for worker in workers {
        if let Err(e) = worker.await {
            tracing::error!(error = %e, "load test worker aborted");
        }
    }

    LoadTestReport {
        single_post,
        single_get,
        total: start.elapsed(),
        successes: tally.successes.load(Ordering::Relaxed),
        errors: tally.errors.load(Ordering::Relaxed),
    }
}
