//! Mock series loader for testing.
//!
//! Provides a deterministic implementation of the
//! [`SeriesLoader`](super::SeriesLoader) trait for unit tests and demos:
//! synthetic price generation plus failure and no-data injection for
//! exercising error handling.
//!
//! # Example
//!
//! ```rust
//! use vol_estimator_rs::loader::mock::MockSeriesLoader;
//!
//! let loader = MockSeriesLoader::new()
//!     .with_start_price(250.0)
//!     .with_wobble(0.01);
//! // In an async context: loader.fetch(&request).await
//! ```

use async_trait::async_trait;
use tracing::debug;

use crate::series::price::{PricePoint, PriceSeries};
use crate::types::error::{VolError, VolResult};
use crate::types::primitives::{Date, Price};

use super::{LoaderRequest, SeriesLoader};

/// Deterministic mock loader.
///
/// Generates one observation per weekday in the requested span, following
/// a geometric path with a fixed drift and a sinusoidal pseudo-noise term,
/// so repeated fetches of the same request produce identical series.
#[derive(Debug, Clone)]
pub struct MockSeriesLoader {
    start_price: Price,
    daily_return: f64,
    wobble: f64,
    inject_no_data: bool,
    inject_failure: Option<String>,
}

impl MockSeriesLoader {
    /// Creates a mock loader with a flat 100.0 starting price, mild upward
    /// drift, and no injected failures.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start_price: 100.0,
            daily_return: 0.0002,
            wobble: 0.015,
            inject_no_data: false,
            inject_failure: None,
        }
    }

    /// Sets the price of the first observation.
    #[must_use]
    pub fn with_start_price(mut self, start_price: Price) -> Self {
        self.start_price = start_price;
        self
    }

    /// Sets the constant daily log-return drift.
    #[must_use]
    pub fn with_daily_return(mut self, daily_return: f64) -> Self {
        self.daily_return = daily_return;
        self
    }

    /// Sets the amplitude of the deterministic pseudo-noise term. Zero
    /// gives a constant-return path.
    #[must_use]
    pub fn with_wobble(mut self, wobble: f64) -> Self {
        self.wobble = wobble;
        self
    }

    /// Makes every fetch report no data, as a provider does for an unknown
    /// ticker.
    #[must_use]
    pub fn with_no_data(mut self) -> Self {
        self.inject_no_data = true;
        self
    }

    /// Makes every fetch fail with a data-source error.
    #[must_use]
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.inject_failure = Some(message.into());
        self
    }

    /// Builds a synthetic price series directly, without going through the
    /// async loader interface: `n` consecutive weekdays with a constant
    /// daily log return and zero noise.
    ///
    /// # Errors
    ///
    /// Returns `VolError::NoData` if `n` is 0.
    pub fn synthetic_series(
        ticker: impl Into<String>,
        n: usize,
        start_price: Price,
        daily_return: f64,
    ) -> VolResult<PriceSeries> {
        let points = weekday_points(Date::from_ymd_opt(2023, 1, 2).unwrap_or_default(), n)
            .enumerate()
            .map(|(i, date)| PricePoint::new(date, start_price * (daily_return * i as f64).exp()))
            .collect();

        PriceSeries::new(ticker, points)
    }
}

impl Default for MockSeriesLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over `n` weekdays starting at the first weekday on or after
/// `from`.
fn weekday_points(from: Date, n: usize) -> impl Iterator<Item = Date> {
    from.iter_days()
        .filter(|d| {
            use chrono::Datelike;
            d.weekday().number_from_monday() <= 5
        })
        .take(n)
}

#[async_trait]
impl SeriesLoader for MockSeriesLoader {
    async fn fetch(&self, request: &LoaderRequest) -> VolResult<PriceSeries> {
        if let Some(message) = &self.inject_failure {
            return Err(VolError::DataSource(message.clone()));
        }

        if self.inject_no_data {
            return Err(VolError::NoData(request.ticker.clone()));
        }

        let mut points = Vec::new();
        let mut price = self.start_price;
        let mut index = 0u32;

        for date in request.start.iter_days() {
            if date > request.end {
                break;
            }

            use chrono::Datelike;
            if date.weekday().number_from_monday() > 5 {
                continue;
            }

            points.push(PricePoint::new(date, price));

            let noise = self.wobble * (f64::from(index) * 0.9).sin();
            price *= (self.daily_return + noise).exp();
            index += 1;
        }

        debug!(
            ticker = %request.ticker,
            observations = points.len(),
            "mock loader generated series"
        );

        PriceSeries::new(request.ticker.clone(), points)
    }
}
