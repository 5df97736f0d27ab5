//! Dow30 Core — universe, date range, price series, provider, export, driver.
//!
//! This crate contains everything the `dow30` binary does:
//! - The fixed Dow Jones Industrial Average ticker universe
//! - Validated date ranges and the output directory naming
//! - Yahoo Finance daily price fetching behind the `PriceProvider` trait
//! - CSV export in the layout downstream readers expect
//! - The sequential fetch-and-persist driver
//! - A reader that loads a downloaded folder back into a close-price matrix

pub mod config;
pub mod data;

pub use config::{ConfigError, DownloadConfig, YahooConfig};
