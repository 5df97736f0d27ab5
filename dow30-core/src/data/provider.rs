//! Price provider trait and structured error types.
//!
//! The `PriceProvider` trait abstracts over the remote source so the driver
//! can be exercised against a mock in tests.

use super::range::DateRange;
use super::series::PriceSeries;
use thiserror::Error;

/// Structured error types for data operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("HTTP {status} for {symbol}")]
    HttpStatus { symbol: String, status: u16 },

    #[error("rate limited by provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("provider rejected request for {symbol}: {reason}")]
    ProviderRejected { symbol: String, reason: String },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("HTTP client error: {0}")]
    Client(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl DataError {
    /// Whether this failure means "the provider had nothing usable for us".
    ///
    /// Any failure of the fetch itself, including an undecodable payload, is
    /// written out as an empty series and the run moves on. Only local
    /// failures (HTTP client setup, filesystem, CSV encoding) abort the run.
    pub fn yields_empty_series(&self) -> bool {
        !matches!(
            self,
            DataError::Client(_) | DataError::Io { .. } | DataError::Csv(_)
        )
    }

    pub(crate) fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        DataError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

/// Trait for daily price sources.
pub trait PriceProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch the daily series for a symbol over a date range.
    ///
    /// An `Ok` series may be empty.
    fn fetch(&self, symbol: &str, range: &DateRange) -> Result<PriceSeries, DataError>;
}

/// Progress callback for the download loop.
pub trait DownloadProgress {
    /// Called before fetching a symbol.
    fn on_start(&self, symbol: &str, index: usize, total: usize);

    /// Called when a symbol came back empty or failed softly.
    fn on_empty(&self, symbol: &str, reason: Option<&DataError>);

    /// Called after the last file is written.
    fn on_batch_complete(&self, written: usize, total: usize);
}

/// Notice printed before each symbol is fetched.
pub fn start_notice(symbol: &str) -> String {
    format!("Downloading {symbol}...")
}

/// Progress reporter that prints to stdout.
pub struct StdoutProgress;

impl DownloadProgress for StdoutProgress {
    fn on_start(&self, symbol: &str, _index: usize, _total: usize) {
        println!("{}", start_notice(symbol));
    }

    fn on_empty(&self, _symbol: &str, _reason: Option<&DataError>) {}

    fn on_batch_complete(&self, _written: usize, _total: usize) {}
}

/// Progress reporter that says nothing.
pub struct SilentProgress;

impl DownloadProgress for SilentProgress {
    fn on_start(&self, _symbol: &str, _index: usize, _total: usize) {}

    fn on_empty(&self, _symbol: &str, _reason: Option<&DataError>) {}

    fn on_batch_complete(&self, _written: usize, _total: usize) {}
}
