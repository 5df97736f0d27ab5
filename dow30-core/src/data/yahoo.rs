//! Yahoo Finance data provider.
//!
//! Fetches daily bars from Yahoo's v8 chart API, one request per symbol.
//! There is no retry and no backoff: a failed request is reported once and
//! the caller decides what to do with it.
//!
//! The query window matches the library the downloaded files were first
//! produced with: `period1` is the start date at midnight UTC and `period2`
//! the end date at midnight UTC, so the end date itself is excluded.

use super::provider::{DataError, PriceProvider};
use super::range::DateRange;
use super::series::{PriceSeries, RawBar};
use crate::config::YahooConfig;
use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Yahoo Finance v8 chart API response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    #[serde(default)]
    meta: ChartMeta,
    timestamp: Option<Vec<i64>>,
    indicators: Option<Indicators>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
    adjclose: Option<Vec<AdjCloseData>>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize)]
struct AdjCloseData {
    adjclose: Vec<Option<f64>>,
}

/// Yahoo Finance data provider.
pub struct YahooProvider {
    client: reqwest::blocking::Client,
    base_url: String,
    auto_adjust: bool,
}

impl YahooProvider {
    pub fn new(config: &YahooConfig, auto_adjust: bool) -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| DataError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auto_adjust,
        })
    }

    /// Build the chart API URL for a symbol and date range.
    pub fn chart_url(base_url: &str, symbol: &str, range: &DateRange) -> String {
        let start_ts = midnight_utc(range.start());
        let end_ts = midnight_utc(range.end());
        format!(
            "{base_url}/{symbol}\
             ?period1={start_ts}&period2={end_ts}&interval=1d\
             &includeAdjustedClose=true&events=div%2Csplits"
        )
    }

    /// Parse a chart API body into a series.
    ///
    /// A chart with no timestamps is an empty series, not an error.
    pub fn parse_chart(
        symbol: &str,
        body: &str,
        auto_adjust: bool,
    ) -> Result<PriceSeries, DataError> {
        let resp: ChartResponse = serde_json::from_str(body).map_err(|e| {
            DataError::ResponseFormatChanged(format!("failed to parse response for {symbol}: {e}"))
        })?;

        let result = match (resp.chart.result, resp.chart.error) {
            (Some(result), _) => result,
            (None, Some(err)) if err.code == "Not Found" => {
                return Err(DataError::SymbolNotFound {
                    symbol: symbol.to_string(),
                })
            }
            (None, Some(err)) => {
                return Err(DataError::ProviderRejected {
                    symbol: symbol.to_string(),
                    reason: format!("{}: {}", err.code, err.description),
                })
            }
            (None, None) => {
                return Err(DataError::ResponseFormatChanged(
                    "empty result with no error".into(),
                ))
            }
        };

        let Some(data) = result.into_iter().next() else {
            return Ok(PriceSeries::empty(symbol));
        };
        let Some(timestamps) = data.timestamp else {
            return Ok(PriceSeries::empty(symbol));
        };

        let indicators = data
            .indicators
            .ok_or_else(|| DataError::ResponseFormatChanged("no indicators".into()))?;
        let quote = indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormatChanged("no quote data".into()))?;
        let adj_closes = indicators
            .adjclose
            .and_then(|v| v.into_iter().next())
            .map(|a| a.adjclose);

        let offset = data.meta.gmtoffset;
        let mut bars = Vec::with_capacity(timestamps.len());

        for (i, &ts) in timestamps.iter().enumerate() {
            let date = ts
                .checked_add(offset)
                .and_then(|local| chrono::DateTime::from_timestamp(local, 0))
                .map(|dt| dt.naive_utc().date())
                .ok_or_else(|| {
                    DataError::ResponseFormatChanged(format!("invalid timestamp: {ts}"))
                })?;

            let price = |v: &Vec<Option<f64>>| v.get(i).copied().flatten().unwrap_or(f64::NAN);

            bars.push(RawBar {
                date,
                open: price(&quote.open),
                high: price(&quote.high),
                low: price(&quote.low),
                close: price(&quote.close),
                adj_close: adj_closes.as_ref().map_or(f64::NAN, price),
                volume: quote.volume.get(i).copied().flatten(),
            });
        }

        Ok(PriceSeries::from_raw(symbol, bars, auto_adjust))
    }
}

fn midnight_utc(date: NaiveDate) -> i64 {
    date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp()
}

impl PriceProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    fn fetch(&self, symbol: &str, range: &DateRange) -> Result<PriceSeries, DataError> {
        let url = Self::chart_url(&self.base_url, symbol, range);
        debug!(%url, "requesting chart");

        let resp = self.client.get(&url).send().map_err(|e| {
            if e.is_builder() {
                DataError::Client(e.to_string())
            } else {
                DataError::NetworkUnreachable(e.to_string())
            }
        })?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DataError::SymbolNotFound {
                symbol: symbol.to_string(),
            });
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(DataError::RateLimited {
                retry_after_secs: retry_after,
            });
        }
        if !status.is_success() {
            return Err(DataError::HttpStatus {
                symbol: symbol.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp
            .text()
            .map_err(|e| DataError::NetworkUnreachable(e.to_string()))?;
        let series = Self::parse_chart(symbol, &body, self.auto_adjust)?;
        debug!(symbol, rows = series.len(), "parsed chart");
        Ok(series)
    }
}
