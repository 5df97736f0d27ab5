//! dow30 — download daily Dow 30 price history for a date range.
//!
//! `dow30 <START_DATE> <END_DATE>` writes one CSV per constituent into
//! `dow_data/{START_DATE}_to_{END_DATE}/`.

use anyhow::{Context, Result};
use clap::Parser;
use dow30_core::data::{run, DateRange, StdoutProgress, Universe, YahooProvider};
use dow30_core::DownloadConfig;
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "Usage: dow30 <start_date: YYYY-mm-dd FORMAT> <end_date: YYYY-mm-dd FORMAT>";

#[derive(Parser)]
#[command(
    name = "dow30",
    about = "Download Dow 30 daily price data from Yahoo Finance"
)]
struct Cli {
    /// Start date in format YYYY-MM-DD.
    start_date: String,

    /// End date in format YYYY-MM-DD.
    end_date: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(std::io::stderr)
        .init();

    let range = match DateRange::parse(&cli.start_date, &cli.end_date) {
        Ok(range) => range,
        Err(_) => {
            println!("{USAGE}");
            std::process::exit(1);
        }
    };

    let config = DownloadConfig::default();
    let provider = YahooProvider::new(&config.yahoo, config.auto_adjust)
        .context("failed to set up Yahoo Finance client")?;

    run(&provider, Universe::dow30(), &range, &config, &StdoutProgress)
        .with_context(|| format!("download for {range} aborted"))?;

    Ok(())
}
