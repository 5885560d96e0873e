use anyhow::{Context, Result};
use clap::Parser;
use test_hosting_app::cli::Cli;
use test_hosting_app::logging::init_tracing;
use test_hosting_app::ui::runtime;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("failed to load configuration")?;

    if let Some(path) = init_tracing(&config.logging) {
        tracing::info!(log_file = %path.display(), "Logging initialized");
    }

    runtime::run(&config).context("terminal UI failed")?;
    Ok(())
}
