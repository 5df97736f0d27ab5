//! Read a downloaded folder back into a close-price matrix.
//!
//! Files are taken in file-name order; each stem is the ticker. The three
//! header rows are skipped and column 1 (Close) is parsed per row.

use super::export::HEADER_ROWS;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("bad close value '{value}' in {path} at row {row}")]
    BadValue {
        path: String,
        row: usize,
        value: String,
    },
}

/// Close prices per ticker, tickers sorted by file name.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseMatrix {
    pub tickers: Vec<String>,
    /// `closes[i]` belongs to `tickers[i]`.
    pub closes: Vec<Vec<f64>>,
}

impl CloseMatrix {
    pub fn get(&self, ticker: &str) -> Option<&[f64]> {
        self.tickers
            .iter()
            .position(|t| t == ticker)
            .and_then(|i| self.closes.get(i))
            .map(Vec::as_slice)
    }
}

/// Load every `*.csv` in `folder`.
pub fn load_close_matrix(folder: &Path) -> Result<CloseMatrix, LoadError> {
    let io_err = |path: &Path, source| LoadError::Io {
        path: path.display().to_string(),
        source,
    };

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(folder).map_err(|e| io_err(folder, e))? {
        let path = entry.map_err(|e| io_err(folder, e))?.path();
        if path.extension().is_some_and(|ext| ext == "csv") {
            files.push(path);
        }
    }
    files.sort();

    let mut matrix = CloseMatrix {
        tickers: Vec::with_capacity(files.len()),
        closes: Vec::with_capacity(files.len()),
    };
    for path in &files {
        let ticker = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        matrix.tickers.push(ticker);
        matrix.closes.push(read_closes(path)?);
    }
    Ok(matrix)
}

/// Close column of one file.
pub fn read_closes(path: &Path) -> Result<Vec<f64>, LoadError> {
    let csv_err = |source| LoadError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    let mut closes = Vec::new();
    for (row, record) in rdr.records().enumerate().skip(HEADER_ROWS) {
        let record = record.map_err(csv_err)?;
        let value = record.get(1).unwrap_or("");
        let close = value.trim().parse::<f64>().map_err(|_| LoadError::BadValue {
            path: path.display().to_string(),
            row,
            value: value.to_string(),
        })?;
        closes.push(close);
    }
    Ok(closes)
}
