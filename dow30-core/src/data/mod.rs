//! Data acquisition and persistence

pub mod download;
pub mod export;
pub mod loader;
pub mod provider;
pub mod range;
pub mod series;
pub mod universe;
pub mod yahoo;

pub use download::{output_dir, run, RunSummary};
pub use export::{series_to_csv, write_series_csv};
pub use loader::{load_close_matrix, CloseMatrix, LoadError};
pub use provider::{
    start_notice, DataError, DownloadProgress, PriceProvider, SilentProgress, StdoutProgress,
};
pub use range::{DateRange, RangeError, DEFAULT_END, DEFAULT_START};
pub use series::{PriceBar, PriceSeries, RawBar};
pub use universe::{Universe, DOW_30};
pub use yahoo::YahooProvider;
