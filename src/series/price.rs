//! Validated close-price series.

use crate::types::error::{VolError, VolResult};
use crate::types::primitives::{Date, Price};

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// A single dated closing-price observation.
///
/// # Example
///
/// ```rust
/// use vol_estimator_rs::series::price::PricePoint;
/// use chrono::NaiveDate;
///
/// let point = PricePoint::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 187.15);
/// assert_eq!(point.price, 187.15);
/// ```
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple)
)]
pub struct PricePoint {
    /// Trading day of the observation.
    pub date: Date,

    /// Closing price. Positive by the `PriceSeries` invariant.
    pub price: Price,
}

impl PricePoint {
    /// Creates a new price point.
    #[must_use]
    pub fn new(date: Date, price: Price) -> Self {
        Self { date, price }
    }
}

/// A time-ordered series of closing prices for one asset.
///
/// # Invariants
///
/// Enforced at construction and never violated afterwards (the series is
/// immutable once built):
///
/// - Non-empty.
/// - All prices are positive and finite.
/// - Dates are strictly increasing (no duplicates). Calendar gaps from
///   non-trading days are accepted and never interpolated.
///
/// # Example
///
/// ```rust
/// use vol_estimator_rs::series::price::{PricePoint, PriceSeries};
/// use chrono::NaiveDate;
///
/// let points = vec![
///     PricePoint::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 100.0),
///     PricePoint::new(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(), 101.0),
/// ];
/// let series = PriceSeries::new("AAPL", points).unwrap();
/// assert_eq!(series.len(), 2);
/// assert_eq!(series.latest().price, 101.0);
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple)
)]
pub struct PriceSeries {
    /// Ticker symbol the series belongs to.
    pub ticker: String,

    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Creates a new price series with validation.
    ///
    /// # Arguments
    ///
    /// * `ticker` - Ticker symbol the series belongs to
    /// * `points` - Dated closing prices, oldest first
    ///
    /// # Errors
    ///
    /// Returns `VolError::NoData` if `points` is empty, and
    /// `VolError::InvalidInput` if any price is non-positive or non-finite,
    /// or if dates are not strictly increasing.
    pub fn new(ticker: impl Into<String>, points: Vec<PricePoint>) -> VolResult<Self> {
        let ticker = ticker.into();

        if points.is_empty() {
            return Err(VolError::NoData(ticker));
        }

        for point in &points {
            if !point.price.is_finite() || point.price <= 0.0 {
                return Err(VolError::InvalidInput(format!(
                    "non-positive price {} at {}",
                    point.price, point.date
                )));
            }
        }

        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(VolError::InvalidInput(format!(
                    "dates not strictly increasing: {} followed by {}",
                    pair[0].date, pair[1].date
                )));
            }
        }

        Ok(Self { ticker, points })
    }

    /// Returns the number of price observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series is empty.
    ///
    /// Always false for a constructed series; provided for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the price points, oldest first.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Returns the most recent observation.
    #[must_use]
    pub fn latest(&self) -> &PricePoint {
        // Non-empty by construction.
        &self.points[self.points.len() - 1]
    }
}
