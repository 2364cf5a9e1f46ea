use anyhow::Context;
use clap::Parser;

use userdesk::cli::{Args, ConfigSource};
use userdesk::logging::init_tracing;
use userdesk::ui::runtime;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = match args.load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let log_path = init_tracing(&config.logging).context("Failed to set up logging")?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %log_path.display(),
        users_url = %config.api.users_url,
        "Starting userdesk"
    );
    match args.config_source() {
        ConfigSource::File(path) => {
            tracing::info!(path = %path.display(), "Loaded config file");
        }
        ConfigSource::Defaults(path) => {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
        }
    }

    let tokio = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime::run(config, tokio.handle().clone()).context("Terminal UI failed")?;

    // Don't wait on an in-flight fetch after the operator quit.
    tokio.shutdown_background();
    Ok(())
}
