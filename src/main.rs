use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;

mod config;
mod models;
mod services;
mod utils;

fn main() -> Result<()> {
    // RUST_LOG may come from a local .env file
    dotenv::dotenv().ok();
    utils::init_logging();

    let path = Path::new(config::REPORT_PATH);
    debug!("loading Lighthouse report from {}", path.display());
    let report = services::load_report(path)
        .with_context(|| format!("could not load Lighthouse report {}", path.display()))?;

    services::print_summary(&report).context("could not print Lighthouse summary")?;
    info!("summary printed for {}", path.display());
    Ok(())
}
