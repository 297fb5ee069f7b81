use clap::Parser;

use transactions::load_test::client::LoadTestClient;
use transactions::load_test::mocked_data::mocked_transaction;
use transactions::load_test::runner::{LoadTestConfig, run_load_test};
use transactions::shell::init_tracing;

/// Fire concurrent POST/GET pairs at a running transactions service
#[derive(Parser, Debug)]
#[command(name = "load_test")]
struct CliArgs {
    /// Base URL of the service
    #[arg(long, default_value = "http://localhost:8080")]
    base_url: String,

    /// Total number of POST/GET pairs
    #[arg(long, default_value_t = 1000)]
    calls: usize,

    /// Number of concurrent workers
    #[arg(long, default_value_t = 5)]
    workers: usize,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(&args.log_level);

    if args.workers == 0 {
        anyhow::bail!("--workers must be at least 1");
    }

    let config = LoadTestConfig {
        calls: args.calls,
        workers: args.workers,
    };
    let report = run_load_test(
        LoadTestClient::new(&args.base_url),
        mocked_transaction(),
        config,
    )
    .await;

    println!("Single POST duration: {:?}", report.single_post);
    println!("Single GET duration: {:?}", report.single_get);
    println!("Total duration for concurrent calls: {:?}", report.total);
    println!("Successful executions: {}", report.successes);
    println!("Error executions: {}", report.errors);
    Ok(())
}
