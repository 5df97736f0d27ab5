//! CSV export for price series.
//!
//! Files use a three-row header so readers that skip exactly three lines
//! and take column 1 as the close keep working:
//!
//! ```text
//! Price,Close,High,Low,Open,Volume
//! Ticker,AAPL,AAPL,AAPL,AAPL,AAPL
//! Date,,,,,
//! 2024-08-01,217.5,224.2,216.8,224.1,62501000
//! ```
//!
//! Missing values are empty fields. An empty series is header-only.

use super::provider::DataError;
use super::series::PriceSeries;
use std::path::Path;

/// Number of header rows before the first data row.
pub const HEADER_ROWS: usize = 3;

const COLUMNS: [&str; 5] = ["Close", "High", "Low", "Open", "Volume"];

/// Render a series as CSV text.
pub fn series_to_csv(series: &PriceSeries) -> Result<String, DataError> {
    let data = series_to_csv_bytes(series)?;
    String::from_utf8(data).map_err(|e| {
        DataError::Csv(std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
    })
}

/// Write a series to `path`, replacing any existing file.
pub fn write_series_csv(path: &Path, series: &PriceSeries) -> Result<(), DataError> {
    let data = series_to_csv_bytes(series)?;
    std::fs::write(path, data).map_err(|e| DataError::io(path, e))
}

fn series_to_csv_bytes(series: &PriceSeries) -> Result<Vec<u8>, DataError> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut price_row = vec!["Price"];
    price_row.extend(COLUMNS);
    wtr.write_record(&price_row)?;

    let mut ticker_row = vec!["Ticker"];
    ticker_row.extend(COLUMNS.iter().map(|_| series.symbol.as_str()));
    wtr.write_record(&ticker_row)?;

    let mut date_row = vec!["Date"];
    date_row.extend(COLUMNS.iter().map(|_| ""));
    wtr.write_record(&date_row)?;

    for bar in &series.bars {
        wtr.write_record([
            bar.date.to_string(),
            format_price(bar.close),
            format_price(bar.high),
            format_price(bar.low),
            format_price(bar.open),
            bar.volume.map(|v| v.to_string()).unwrap_or_default(),
        ])?;
    }

    wtr.into_inner()
        .map_err(|e| DataError::Csv(e.into_error().into()))
}

fn format_price(v: f64) -> String {
    if v.is_finite() {
        v.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::series::PriceBar;
    use chrono::NaiveDate;

    fn series() -> PriceSeries {
        PriceSeries {
            symbol: "AAPL".into(),
            bars: vec![
                PriceBar {
                    date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
                    open: 224.37,
                    high: 224.48,
                    low: 217.02,
                    close: 218.36,
                    volume: Some(62_501_000),
                },
                PriceBar {
                    date: NaiveDate::from_ymd_opt(2024, 8, 2).unwrap(),
                    open: f64::NAN,
                    high: 225.6,
                    low: 217.71,
                    close: 219.86,
                    volume: None,
                },
            ],
        }
    }

    #[test]
    fn three_row_header_then_data() {
        let csv = series_to_csv(&series()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Price,Close,High,Low,Open,Volume");
        assert_eq!(lines[1], "Ticker,AAPL,AAPL,AAPL,AAPL,AAPL");
        assert_eq!(lines[2], "Date,,,,,");
        assert_eq!(lines[3], "2024-08-01,218.36,224.48,217.02,224.37,62501000");
        assert_eq!(lines[4], "2024-08-02,219.86,225.6,217.71,,");
        assert_eq!(lines.len(), HEADER_ROWS + 2);
    }

    #[test]
    fn empty_series_is_header_only() {
        let csv = series_to_csv(&PriceSeries::empty("WBA")).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), HEADER_ROWS);
        assert_eq!(lines[1], "Ticker,WBA,WBA,WBA,WBA,WBA");
    }

    #[test]
    fn written_file_matches_rendered_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("AAPL.csv");
        write_series_csv(&path, &series()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            series_to_csv(&series()).unwrap()
        );
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("AAPL.csv");
        std::fs::write(&path, "stale contents that are longer than nothing\n".repeat(50)).unwrap();

        write_series_csv(&path, &PriceSeries::empty("AAPL")).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale"));
        assert_eq!(text.lines().count(), HEADER_ROWS);
    }

    #[test]
    fn write_into_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("AAPL.csv");
        let err = write_series_csv(&path, &series()).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
