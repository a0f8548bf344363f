use anyhow::Context;
use clap::Parser;
use issuers_cli::{Cli, CliConfig, command_error, run};
use issuers_core::IssuersCore;
use issuers_core::config::core_config::AppConfig;
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config_files = cli.config.unwrap_or_default();
    config_files.insert(0, "config/config.yml".into());

    let app_config: AppConfig<CliConfig> =
        AppConfig::from_files(&config_files).context("Failed creating config")?;

    initialize_tracing(&app_config.app)?;
    tracing::debug!("Loaded config from {config_files:?}");

    let core = IssuersCore::new(&app_config.core);

    let output = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(&core, cli.command))
        .map_err(command_error)?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn initialize_tracing(config: &CliConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new(config.trace_level.as_deref().unwrap_or("info"))
        })
        .context("Failed to create env filter")?;

    let tracing_layer = tracing_subscriber::registry().with(filter);

    if config.trace_json.unwrap_or_default() {
        tracing_layer
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_layer
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    };

    Ok(())
}
