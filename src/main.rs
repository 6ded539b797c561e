use clap::Parser;
use job_detail::cli::{handle_command, Cli};
use std::fs::OpenOptions;
use std::process::ExitCode;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout is reserved for the rendered page, logs go to a file
    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let log_file = config.service.log_file.clone();
    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_file)
    {
        Ok(file) => {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(file)
                        .with_current_span(false)
                        .with_span_list(false),
                )
                .with(filter)
                .init();
        }
        Err(e) => eprintln!("Logging disabled, cannot open {}: {}", log_file.display(), e),
    }

    // load ran before the subscriber existed
    tracing::info!(
        "Configuration loaded for environment: {}",
        config.environment
    );

    match handle_command(cli, config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Command failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
