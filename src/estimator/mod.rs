//! Annualized volatility estimators.
//!
//! This module provides the estimator bank of the pipeline:
//!
//! - [`historical::historical_volatility`]: full-sample scalar
//! - [`rolling::RollingVolatility`]: fixed-window series (any window ≥ 2)
//! - [`ewma::EwmaVolatility`]: exponentially-weighted series
//!
//! All estimators consume the same [`ReturnSeries`](crate::series::returns::ReturnSeries),
//! are independent of one another, and annualize by scaling the daily
//! standard deviation with √(trading days per year) from
//! [`EstimatorConfig`]. Series output is a [`VolatilitySeries`]: one entry
//! per return observation, with leading entries undefined until the
//! estimator's warm-up requirement is met. A value at index i uses only
//! returns at or before i.

use crate::types::error::{VolError, VolResult};
use crate::types::primitives::Volatility;

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// Estimator configuration.
pub mod config;

/// Exponentially-weighted moving average estimator.
pub mod ewma;

/// Full-sample historical estimator.
pub mod historical;

/// Fixed-length rolling-window estimator.
pub mod rolling;

pub use config::EstimatorConfig;

/// A named annualized-volatility series aligned one-to-one with a return
/// series.
///
/// Entries before the producing estimator's warm-up requirement are `None`.
/// Where defined, the value at index i is timestamped at the same date as
/// return observation i.
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple)
)]
pub struct VolatilitySeries {
    /// Display label for the series (e.g. "20d", "ewma").
    pub label: String,

    values: Vec<Option<Volatility>>,
}

impl VolatilitySeries {
    /// Creates a series from per-observation values.
    ///
    /// `values` must be aligned one-to-one with the return series the
    /// estimator consumed.
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<Option<Volatility>>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    /// Returns the number of entries (defined or not), equal to the length
    /// of the return series the estimator consumed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the series has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the per-observation values, leading `None`s included.
    #[must_use]
    pub fn values(&self) -> &[Option<Volatility>] {
        &self.values
    }

    /// Number of leading undefined entries (the warm-up gap).
    #[must_use]
    pub fn warmup(&self) -> usize {
        self.values.iter().take_while(|v| v.is_none()).count()
    }

    /// The most recent value, if defined.
    #[must_use]
    pub fn latest(&self) -> Option<Volatility> {
        self.values.last().copied().flatten()
    }

    /// Iterates over the defined values, oldest first.
    pub fn defined(&self) -> impl Iterator<Item = Volatility> + '_ {
        self.values.iter().filter_map(|v| *v)
    }

    /// Median of the defined values.
    ///
    /// For an even count, the mean of the two middle values.
    ///
    /// # Errors
    ///
    /// Returns `VolError::InsufficientData` if no entry is defined.
    pub fn median(&self) -> VolResult<Volatility> {
        let mut defined: Vec<Volatility> = self.defined().collect();

        if defined.is_empty() {
            return Err(VolError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }

        defined.sort_by(|a, b| a.total_cmp(b));

        let mid = defined.len() / 2;
        if defined.len() % 2 == 1 {
            Ok(defined[mid])
        } else {
            Ok((defined[mid - 1] + defined[mid]) / 2.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warmup_counts_leading_undefined() {
        let series = VolatilitySeries::new("20d", vec![None, None, Some(0.2), Some(0.3)]);
        assert_eq!(series.warmup(), 2);
        assert_eq!(series.len(), 4);
    }

    #[test]
    fn test_latest_defined() {
        let series = VolatilitySeries::new("20d", vec![None, Some(0.2), Some(0.25)]);
        assert_eq!(series.latest(), Some(0.25));
    }

    #[test]
    fn test_latest_undefined() {
        let series = VolatilitySeries::new("20d", vec![None, None]);
        assert_eq!(series.latest(), None);
    }

    #[test]
    fn test_median_odd_count() {
        let series = VolatilitySeries::new("x", vec![Some(0.3), Some(0.1), Some(0.2)]);
        assert_eq!(series.median().unwrap(), 0.2);
    }

    #[test]
    fn test_median_even_count() {
        let series =
            VolatilitySeries::new("x", vec![Some(0.1), Some(0.4), Some(0.2), Some(0.3)]);
        assert!((series.median().unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_median_ignores_undefined() {
        let series = VolatilitySeries::new("x", vec![None, None, Some(0.5)]);
        assert_eq!(series.median().unwrap(), 0.5);
    }

    #[test]
    fn test_median_empty_is_insufficient_data() {
        let series = VolatilitySeries::new("x", vec![None, None]);
        assert!(matches!(
            series.median().unwrap_err(),
            VolError::InsufficientData { .. }
        ));
    }
}
