//! Daily price series types.
//!
//! `RawBar` is what the provider hands back. `PriceSeries` is what gets
//! written: optionally split/dividend adjusted, ascending by date, possibly
//! empty.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw daily bar from a data provider (before adjustment).
///
/// Missing prices are `NaN`; a missing volume is `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adj_close: f64,
    pub volume: Option<u64>,
}

impl RawBar {
    /// True when every OHLCV field is missing (holidays, halted sessions).
    pub fn is_void(&self) -> bool {
        self.open.is_nan()
            && self.high.is_nan()
            && self.low.is_nan()
            && self.close.is_nan()
            && self.volume.is_none()
    }
}

/// One output row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<u64>,
}

/// Date-indexed daily series for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: String,
    pub bars: Vec<PriceBar>,
}

impl PriceSeries {
    pub fn empty(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            bars: Vec::new(),
        }
    }

    /// Build a series from provider rows.
    ///
    /// Void rows are dropped and the rest sorted by date. With `auto_adjust`,
    /// open/high/low are scaled by `adj_close / close` and close is replaced
    /// by the adjusted close. Rows lacking a usable adjusted close keep their
    /// raw prices.
    pub fn from_raw(symbol: impl Into<String>, raw: Vec<RawBar>, auto_adjust: bool) -> Self {
        let mut bars: Vec<PriceBar> = raw
            .into_iter()
            .filter(|b| !b.is_void())
            .map(|b| {
                let factor = if auto_adjust && b.adj_close.is_finite() && b.close != 0.0 {
                    b.adj_close / b.close
                } else {
                    1.0
                };
                let close = if factor == 1.0 { b.close } else { b.adj_close };
                PriceBar {
                    date: b.date,
                    open: b.open * factor,
                    high: b.high * factor,
                    low: b.low * factor,
                    close,
                    volume: b.volume,
                }
            })
            .collect();
        bars.sort_by_key(|b| b.date);

        Self {
            symbol: symbol.into(),
            bars,
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.bars.first().map(|b| b.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.bars.last().map(|b| b.date)
    }
}
