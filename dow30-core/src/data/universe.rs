//! Universe — the fixed Dow Jones Industrial Average constituents.
//!
//! The list is a compile-time constant. Iteration order is download order.

/// The 30 Dow constituents, in download order.
pub const DOW_30: [&str; 30] = [
    "AAPL", "AMGN", "AXP", "BA", "CAT", "CRM", "CSCO", "CVX", "DIS", "GS", "HD", "HON", "IBM",
    "INTC", "JNJ", "JPM", "KO", "MCD", "MMM", "MRK", "MSFT", "NKE", "PG", "TRV", "UNH", "V", "VZ",
    "WBA", "WMT", "XOM",
];

/// An ordered, borrowed ticker list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Universe {
    tickers: &'static [&'static str],
}

impl Universe {
    /// The Dow 30 universe.
    pub const fn dow30() -> Self {
        Self { tickers: &DOW_30 }
    }

    /// Tickers in download order.
    pub fn tickers(&self) -> &'static [&'static str] {
        self.tickers
    }

    /// Total number of tickers.
    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.tickers.contains(&symbol)
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::dow30()
    }
}
