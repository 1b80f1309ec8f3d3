use anyhow::{Context, Result};
use config::{Config, OutputFormat};
use log::{debug, info};
use price_report_lib::{codec::Encode, snapshot::ReportSnapshot, torob::listings::LISTINGS};
use std::io::Write;

mod config;
mod errors;
mod report;

fn main() -> Result<()> {
    env_logger::init();

    info!(
        "Starting Galaxy A56 price report (a56prices) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env().context("Failed to load report config")?;
    debug!("Output format: {:?}", config.format);

    match config.format {
        OutputFormat::Text => report::run().context("Failed to print price report")?,
        OutputFormat::Json => {
            let snapshot = ReportSnapshot::from_listings(&LISTINGS);
            debug!("Snapshot range: {:?}", snapshot.range);

            let payload = ReportSnapshot::encode(&snapshot).map_err(errors::ReportError::from)?;
            let mut out = std::io::stdout().lock();
            out.write_all(&payload)
                .and_then(|_| out.flush())
                .context("Failed to print price snapshot")?;
        }
    }
    Ok(())
}
