//! Fixed-length rolling-window volatility.

use tracing::debug;

use crate::estimator::{EstimatorConfig, VolatilitySeries};
use crate::series::returns::{sample_std, ReturnSeries};
use crate::types::error::{VolError, VolResult};

/// Rolling-window annualized volatility estimator.
///
/// For a window of length w, the value at return index i (for i >= w − 1)
/// is the sample standard deviation of returns i−w+1..=i scaled by
/// √(trading days per year). Indices before w − 1 are undefined: the
/// warm-up is strict, and no partial-window output is produced.
///
/// # Example
///
/// ```rust
/// use vol_estimator_rs::estimator::{rolling::RollingVolatility, EstimatorConfig};
/// use vol_estimator_rs::series::price::{PricePoint, PriceSeries};
/// use vol_estimator_rs::series::returns::ReturnSeries;
/// use chrono::NaiveDate;
///
/// let points = (0..30)
///     .map(|i| {
///         let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i);
///         PricePoint::new(date, 100.0 + (i % 3) as f64)
///     })
///     .collect();
/// let prices = PriceSeries::new("DEMO", points).unwrap();
/// let returns = ReturnSeries::from_prices(&prices).unwrap();
///
/// let estimator = RollingVolatility::new(20).unwrap();
/// let series = estimator.compute(&returns, &EstimatorConfig::default());
/// assert_eq!(series.len(), returns.len());
/// assert_eq!(series.warmup(), 19);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingVolatility {
    window: usize,
}

impl RollingVolatility {
    /// Creates a rolling estimator for the given window length.
    ///
    /// # Errors
    ///
    /// Returns `VolError::InvalidConfiguration` if `window` < 2 (a sample
    /// standard deviation needs at least two observations).
    pub fn new(window: usize) -> VolResult<Self> {
        if window < 2 {
            return Err(VolError::InvalidConfiguration(format!(
                "rolling window must be >= 2, got {window}"
            )));
        }
        Ok(Self { window })
    }

    /// Returns the window length in trading days.
    #[must_use]
    pub fn window(&self) -> usize {
        self.window
    }

    /// Label used for this estimator's output series (e.g. "20d").
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}d", self.window)
    }

    /// Computes the rolling volatility series over a return series.
    ///
    /// The output is aligned one-to-one with `returns`: exactly
    /// `max(0, n − w + 1)` trailing entries are defined and the leading
    /// w − 1 entries are `None`. A series shorter than the window produces
    /// all-undefined output rather than an error, so callers can treat a
    /// not-yet-warm window uniformly with its warm-up gap.
    #[must_use]
    pub fn compute(&self, returns: &ReturnSeries, config: &EstimatorConfig) -> VolatilitySeries {
        let values = returns.values();
        let factor = config.annualization_factor();

        let mut out: Vec<Option<f64>> = vec![None; values.len()];

        if values.len() >= self.window {
            for (i, w) in values.windows(self.window).enumerate() {
                // windows of length >= 2 by construction, so sample_std
                // cannot fail here.
                if let Ok(std) = sample_std(w) {
                    out[i + self.window - 1] = Some(std * factor);
                }
            }
        }

        debug!(
            window = self.window,
            observations = values.len(),
            defined = values.len().saturating_sub(self.window - 1),
            "computed rolling volatility series"
        );

        VolatilitySeries::new(self.label(), out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::price::{PricePoint, PriceSeries};
    use crate::types::primitives::Date;

    fn returns_from(prices: &[f64]) -> ReturnSeries {
        let points = prices
            .iter()
            .enumerate()
            .map(|(i, p)| {
                PricePoint::new(
                    Date::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i as u64),
                    *p,
                )
            })
            .collect();
        ReturnSeries::from_prices(&PriceSeries::new("TEST", points).unwrap()).unwrap()
    }

    #[test]
    fn test_window_of_one_rejected() {
        assert!(RollingVolatility::new(1).is_err());
        assert!(RollingVolatility::new(0).is_err());
    }

    #[test]
    fn test_window_of_two_accepted() {
        assert!(RollingVolatility::new(2).is_ok());
    }

    #[test]
    fn test_defined_count() {
        // 10 prices -> 9 returns; window 4 -> 9 - 4 + 1 = 6 defined values.
        let prices: Vec<f64> = (0..10).map(|i| 100.0 + (i as f64).sin()).collect();
        let returns = returns_from(&prices);

        let series = RollingVolatility::new(4)
            .unwrap()
            .compute(&returns, &EstimatorConfig::default());

        assert_eq!(series.len(), 9);
        assert_eq!(series.warmup(), 3);
        assert_eq!(series.defined().count(), 6);
    }

    #[test]
    fn test_series_shorter_than_window_all_undefined() {
        let returns = returns_from(&[100.0, 101.0, 102.0]); // 2 returns
        let series = RollingVolatility::new(5)
            .unwrap()
            .compute(&returns, &EstimatorConfig::default());

        assert_eq!(series.len(), 2);
        assert_eq!(series.defined().count(), 0);
        assert_eq!(series.latest(), None);
    }

    #[test]
    fn test_matches_manual_window_std() {
        let prices = [100.0, 102.0, 101.0, 104.0, 103.0, 106.0];
        let returns = returns_from(&prices);
        let config = EstimatorConfig::default();

        let series = RollingVolatility::new(3).unwrap().compute(&returns, &config);

        // Value at index 2 covers returns 0..=2.
        let expected = sample_std(&returns.values()[0..3]).unwrap() * 252.0f64.sqrt();
        let got = series.values()[2].unwrap();
        assert!((got - expected).abs() < 1e-12);
    }

    #[test]
    fn test_no_look_ahead() {
        // Perturbing a later return must not change an earlier value.
        let quiet: Vec<f64> = (0..12).map(|i| 100.0 * 1.001f64.powi(i)).collect();
        let mut shocked = quiet.clone();
        shocked[11] = 150.0;

        let config = EstimatorConfig::default();
        let estimator = RollingVolatility::new(4).unwrap();

        let base = estimator.compute(&returns_from(&quiet), &config);
        let with_shock = estimator.compute(&returns_from(&shocked), &config);

        // All entries strictly before the shocked return are identical.
        for i in 0..10 {
            assert_eq!(base.values()[i], with_shock.values()[i]);
        }
        assert_ne!(base.values()[10], with_shock.values()[10]);
    }

    #[test]
    fn test_constant_returns_give_zero_series() {
        let prices: Vec<f64> = (0..8).map(|i| 100.0 * 1.002f64.powi(i)).collect();
        let returns = returns_from(&prices);

        let series = RollingVolatility::new(3)
            .unwrap()
            .compute(&returns, &EstimatorConfig::default());

        for v in series.defined() {
            assert!(v.abs() < 1e-10);
        }
    }
}
