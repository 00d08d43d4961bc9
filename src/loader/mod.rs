//! Price-series loading boundary.
//!
//! Fetching market data is a collaborator concern: the pipeline only
//! requires that whatever loads prices hands it a valid
//! [`PriceSeries`](crate::series::price::PriceSeries). The
//! [`SeriesLoader`] trait is that contract, kept async because real
//! providers sit behind the network.
//!
//! A deterministic [`mock`] implementation is provided for tests and
//! demos.

use async_trait::async_trait;

use crate::series::price::PriceSeries;
use crate::types::error::{VolError, VolResult};
use crate::types::primitives::Date;

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// Mock series loader for testing.
pub mod mock;

/// A request for historical closing prices.
///
/// # Example
///
/// ```rust
/// use vol_estimator_rs::loader::LoaderRequest;
/// use chrono::NaiveDate;
///
/// let end = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
/// let request = LoaderRequest::lookback_years("AAPL", end, 3).unwrap();
/// assert_eq!(request.ticker, "AAPL");
/// assert!(request.start < request.end);
/// ```
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple)
)]
pub struct LoaderRequest {
    /// Ticker symbol to fetch.
    pub ticker: String,

    /// First date of the span (inclusive).
    pub start: Date,

    /// Last date of the span (inclusive).
    pub end: Date,
}

impl LoaderRequest {
    /// Creates a request for an explicit date span.
    ///
    /// # Errors
    ///
    /// Returns `VolError::InvalidConfiguration` if the ticker is empty or
    /// `start` is not before `end`.
    pub fn new(ticker: impl Into<String>, start: Date, end: Date) -> VolResult<Self> {
        let ticker = ticker.into();

        if ticker.trim().is_empty() {
            return Err(VolError::InvalidConfiguration(
                "ticker must not be empty".to_string(),
            ));
        }

        if start >= end {
            return Err(VolError::InvalidConfiguration(format!(
                "start {start} must be before end {end}"
            )));
        }

        Ok(Self {
            ticker,
            start,
            end,
        })
    }

    /// Creates a request spanning `years` years back from `end`.
    ///
    /// Any positive span is accepted; a UI may bound it more tightly.
    ///
    /// # Errors
    ///
    /// Returns `VolError::InvalidConfiguration` if the ticker is empty or
    /// `years` is zero.
    pub fn lookback_years(ticker: impl Into<String>, end: Date, years: u32) -> VolResult<Self> {
        if years == 0 {
            return Err(VolError::InvalidConfiguration(
                "lookback must be at least 1 year".to_string(),
            ));
        }

        let start = end - chrono::Days::new(365 * u64::from(years));
        Self::new(ticker, start, end)
    }
}

/// Abstract interface for loading historical closing prices.
///
/// # Contract
///
/// - The returned series is chronologically ordered with positive prices
///   and no duplicate dates (enforced by `PriceSeries` construction).
/// - An empty provider response must surface as [`VolError::NoData`], not
///   as an empty series or a panic.
/// - Transport or provider failures surface as [`VolError::DataSource`].
#[async_trait]
pub trait SeriesLoader: Send + Sync {
    /// Fetches closing prices for the requested ticker and span.
    async fn fetch(&self, request: &LoaderRequest) -> VolResult<PriceSeries>;
}
