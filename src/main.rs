use clap::Parser;
use json_batch_fetch::core::{presenter, TargetProvider};
use json_batch_fetch::utils::{logger, monitor::SystemMonitor, validation::Validate};
use json_batch_fetch::{BatchFetcher, CliConfig, ElapsedTimeReporter, MonotonicClock, ReqwestHttpClient};

const CLOSING_MESSAGE: &str = "Batch fetch finished.";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let monitor = SystemMonitor::new(config.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 Resource monitoring enabled");
    }

    println!("Beginning batch fetch of {} endpoints...", config.targets().len());

    let fetcher = BatchFetcher::new(ReqwestHttpClient::new());
    let reporter = ElapsedTimeReporter::new(MonotonicClock).with_closing_message(CLOSING_MESSAGE);

    reporter
        .measure(async {
            let outcome = fetcher.fetch_urls(config.targets()).await;
            presenter::present(&outcome);
            outcome
        })
        .await;

    monitor.log_stats("Batch settled");

    Ok(())
}
