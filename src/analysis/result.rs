//! Immutable analysis result aggregate.

use crate::estimator::VolatilitySeries;
use crate::series::price::PriceSeries;
use crate::series::returns::ReturnSeries;
use crate::types::error::{VolError, VolResult};
use crate::types::primitives::{Date, LogReturn, Price, Volatility};

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// A volatility series truncated to the clean range: every value defined.
///
/// Produced only by [`AnalysisResult::build`], which makes the
/// drop-warm-up alignment an explicit, type-checked step rather than an
/// implicit drop-missing-rows pass.
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple)
)]
pub struct CleanSeries {
    /// Display label carried over from the producing estimator.
    pub label: String,

    values: Vec<Volatility>,
}

impl CleanSeries {
    /// Returns the values, oldest first. Same length as the clean range.
    #[must_use]
    pub fn values(&self) -> &[Volatility] {
        &self.values
    }

    /// The most recent value.
    #[must_use]
    pub fn latest(&self) -> Volatility {
        // Non-empty by AnalysisResult::build.
        self.values[self.values.len() - 1]
    }
}

/// One row of the clean range: date, price, and every series value.
///
/// Values are ordered as [`AnalysisResult::series`].
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple)
)]
pub struct ResultRow {
    /// Trading day of the row.
    pub date: Date,

    /// Closing price on that day.
    pub price: Price,

    /// Volatility values, one per series, in series order.
    pub vols: Vec<Volatility>,
}

/// Immutable aggregate of one analysis run.
///
/// Holds the return series, the historical volatility scalar, and every
/// volatility series, all truncated to the clean common range: the
/// contiguous suffix of the analyzed range where every series has a defined
/// value (the intersection of warm-up requirements, dominated by the
/// longest rolling window).
///
/// Built fresh per analysis request, never mutated afterwards, and simply
/// replaced when a new request is made.
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple)
)]
pub struct AnalysisResult {
    /// Ticker symbol the analysis belongs to.
    pub ticker: String,

    /// Annualized historical volatility over the full (untruncated) return
    /// series.
    pub historical_vol: Volatility,

    dates: Vec<Date>,
    prices: Vec<Price>,
    returns: Vec<LogReturn>,
    series: Vec<CleanSeries>,
}

impl AnalysisResult {
    /// Builds the result by aligning every series to the clean common
    /// range.
    ///
    /// `series` entries must be aligned one-to-one with `returns` (as
    /// produced by the estimators in this crate). The clean range starts at
    /// the maximum warm-up across all series.
    ///
    /// # Errors
    ///
    /// Returns `VolError::InsufficientData` if the clean range is empty,
    /// i.e. the return series is shorter than the longest warm-up
    /// requirement.
    pub fn build(
        prices: &PriceSeries,
        returns: &ReturnSeries,
        historical_vol: Volatility,
        series: Vec<VolatilitySeries>,
    ) -> VolResult<Self> {
        let n = returns.len();
        let start = series.iter().map(VolatilitySeries::warmup).max().unwrap_or(0);

        if start >= n {
            return Err(VolError::InsufficientData {
                required: start + 1,
                actual: n,
            });
        }

        let dates = returns.dates()[start..].to_vec();
        // Return index i derives from price index i + 1.
        let clean_prices = prices.points()[start + 1..]
            .iter()
            .map(|p| p.price)
            .collect();
        let clean_returns = returns.values()[start..].to_vec();

        let clean_series = series
            .into_iter()
            .map(|s| {
                let values = s.values()[start..]
                    .iter()
                    .map(|v| {
                        // Defined on the clean suffix by construction: the
                        // suffix starts at the maximum warm-up.
                        v.ok_or_else(|| {
                            VolError::InvalidInput(format!(
                                "series {} has an undefined value inside the clean range",
                                s.label
                            ))
                        })
                    })
                    .collect::<VolResult<Vec<Volatility>>>()?;
                Ok(CleanSeries {
                    label: s.label.clone(),
                    values,
                })
            })
            .collect::<VolResult<Vec<CleanSeries>>>()?;

        Ok(Self {
            ticker: prices.ticker.clone(),
            historical_vol,
            dates,
            prices: clean_prices,
            returns: clean_returns,
            series: clean_series,
        })
    }

    /// Number of rows in the clean range.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the clean range is empty.
    ///
    /// Always false for a built result; provided for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Dates of the clean range, oldest first.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Closing prices over the clean range.
    #[must_use]
    pub fn prices(&self) -> &[Price] {
        &self.prices
    }

    /// Log returns over the clean range.
    #[must_use]
    pub fn returns(&self) -> &[LogReturn] {
        &self.returns
    }

    /// The clean volatility series, in the order they were supplied to
    /// [`build`](Self::build).
    #[must_use]
    pub fn series(&self) -> &[CleanSeries] {
        &self.series
    }

    /// Looks up a clean series by its label.
    #[must_use]
    pub fn series_by_label(&self, label: &str) -> Option<&CleanSeries> {
        self.series.iter().find(|s| s.label == label)
    }

    /// The last `n` rows (or fewer if the clean range is shorter), for
    /// latest-values table views.
    #[must_use]
    pub fn tail(&self, n: usize) -> Vec<ResultRow> {
        let start = self.len().saturating_sub(n);
        (start..self.len())
            .map(|i| ResultRow {
                date: self.dates[i],
                price: self.prices[i],
                vols: self.series.iter().map(|s| s.values[i]).collect(),
            })
            .collect()
    }
}
