//! Fetch-and-persist driver.
//!
//! Strictly sequential: one symbol is fetched and written before the next is
//! requested. A failed fetch (unknown symbol, HTTP error, network failure,
//! undecodable payload) is written as a header-only file and the run
//! continues. A local failure (client setup, filesystem, CSV encoding) stops
//! the run where it is; files already written stay on disk.

use super::export::write_series_csv;
use super::provider::{DataError, DownloadProgress, PriceProvider};
use super::range::DateRange;
use super::series::PriceSeries;
use super::universe::Universe;
use crate::config::DownloadConfig;
use std::path::PathBuf;
use tracing::{info, warn};

/// Output directory for a range: `{output_root}/{start}_to_{end}`.
pub fn output_dir(config: &DownloadConfig, range: &DateRange) -> PathBuf {
    config.output_root.join(range.folder_name())
}

/// Download every symbol in `universe` for `range` into the output directory.
pub fn run(
    provider: &dyn PriceProvider,
    universe: Universe,
    range: &DateRange,
    config: &DownloadConfig,
    progress: &dyn DownloadProgress,
) -> Result<RunSummary, DataError> {
    let dir = output_dir(config, range);
    std::fs::create_dir_all(&dir).map_err(|e| DataError::io(&dir, e))?;
    info!(dir = %dir.display(), provider = provider.name(), %range, "starting download");

    let total = universe.len();
    let mut summary = RunSummary {
        output_dir: dir,
        written: Vec::with_capacity(total),
        empty: Vec::new(),
    };

    for (i, &symbol) in universe.tickers().iter().enumerate() {
        progress.on_start(symbol, i, total);

        let series = match provider.fetch(symbol, range) {
            Ok(series) => {
                if series.is_empty() {
                    progress.on_empty(symbol, None);
                }
                series
            }
            Err(e) if e.yields_empty_series() => {
                warn!(symbol, error = %e, "no data returned, writing empty file");
                progress.on_empty(symbol, Some(&e));
                PriceSeries::empty(symbol)
            }
            Err(e) => return Err(e),
        };

        if series.is_empty() {
            summary.empty.push(symbol.to_string());
        }
        write_series_csv(&summary.output_dir.join(format!("{symbol}.csv")), &series)?;
        summary.written.push(symbol.to_string());
    }

    progress.on_batch_complete(summary.written.len(), total);
    Ok(summary)
}

/// What a completed run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_dir: PathBuf,
    /// Every symbol that got a file, in download order.
    pub written: Vec<String>,
    /// Symbols whose file is header-only.
    pub empty: Vec<String>,
}

impl RunSummary {
    pub fn all_populated(&self) -> bool {
        self.empty.is_empty()
    }
}
