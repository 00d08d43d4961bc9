//! Log-return series derived from a price series.

use crate::series::price::PriceSeries;
use crate::types::error::{VolError, VolResult};
use crate::types::primitives::{Date, LogReturn};

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// A time-ordered series of daily log returns.
///
/// Built from a [`PriceSeries`] of length n, the return series has exactly
/// n − 1 entries: `r[i] = ln(p[i+1] / p[i])`, timestamped at the later of
/// the two prices. The first price has no prior observation and is dropped.
///
/// Calendar gaps are accepted as-is: a return spans whatever distance
/// separates consecutive available prices.
///
/// # Example
///
/// ```rust
/// use vol_estimator_rs::series::price::{PricePoint, PriceSeries};
/// use vol_estimator_rs::series::returns::ReturnSeries;
/// use chrono::NaiveDate;
///
/// let prices = PriceSeries::new(
///     "AAPL",
///     vec![
///         PricePoint::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 100.0),
///         PricePoint::new(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(), 102.0),
///     ],
/// )
/// .unwrap();
///
/// let returns = ReturnSeries::from_prices(&prices).unwrap();
/// assert_eq!(returns.len(), 1);
/// assert!((returns.values()[0] - (102.0f64 / 100.0).ln()).abs() < 1e-12);
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple)
)]
pub struct ReturnSeries {
    dates: Vec<Date>,
    values: Vec<LogReturn>,
}

impl ReturnSeries {
    /// Computes log returns from a price series.
    ///
    /// # Errors
    ///
    /// Returns `VolError::InvalidInput` if the series has fewer than 2
    /// points. Non-positive prices are rejected at `PriceSeries`
    /// construction, so the logarithm is always defined here.
    pub fn from_prices(prices: &PriceSeries) -> VolResult<Self> {
        let points = prices.points();

        if points.len() < 2 {
            return Err(VolError::InvalidInput(format!(
                "need at least 2 prices to compute returns, got {}",
                points.len()
            )));
        }

        let mut dates = Vec::with_capacity(points.len() - 1);
        let mut values = Vec::with_capacity(points.len() - 1);

        for pair in points.windows(2) {
            dates.push(pair[1].date);
            values.push((pair[1].price / pair[0].price).ln());
        }

        Ok(Self { dates, values })
    }

    /// Returns the number of return observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the series is empty.
    ///
    /// Always false for a constructed series; provided for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the observation dates, oldest first.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the log-return values, oldest first.
    #[must_use]
    pub fn values(&self) -> &[LogReturn] {
        &self.values
    }

    /// Sample standard deviation (n − 1 divisor) of the full return series,
    /// in daily (non-annualized) units.
    ///
    /// # Errors
    ///
    /// Returns `VolError::InsufficientData` if fewer than 2 observations
    /// exist.
    pub fn sample_std(&self) -> VolResult<f64> {
        sample_std(&self.values)
    }
}

/// Sample standard deviation (n − 1 divisor) of a slice of observations.
///
/// # Errors
///
/// Returns `VolError::InsufficientData` if the slice has fewer than 2
/// elements.
pub(crate) fn sample_std(values: &[f64]) -> VolResult<f64> {
    if values.len() < 2 {
        return Err(VolError::InsufficientData {
            required: 2,
            actual: values.len(),
        });
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);

    Ok(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::price::PricePoint;

    fn date(day: u32) -> Date {
        Date::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn series(prices: &[f64]) -> PriceSeries {
        let points = prices
            .iter()
            .enumerate()
            .map(|(i, p)| PricePoint::new(date(1 + i as u32), *p))
            .collect();
        PriceSeries::new("TEST", points).unwrap()
    }

    #[test]
    fn test_length_is_one_less_than_prices() {
        let returns = ReturnSeries::from_prices(&series(&[100.0, 101.0, 102.0, 99.0])).unwrap();
        assert_eq!(returns.len(), 3);
    }

    #[test]
    fn test_single_price_rejected() {
        let returns = ReturnSeries::from_prices(&series(&[100.0]));
        assert!(matches!(returns.unwrap_err(), VolError::InvalidInput(_)));
    }

    #[test]
    fn test_returns_round_trip_to_prices() {
        let prices = [100.0, 103.7, 98.2, 98.2, 110.0];
        let returns = ReturnSeries::from_prices(&series(&prices)).unwrap();

        for (i, r) in returns.values().iter().enumerate() {
            let reconstructed = prices[i] * r.exp();
            assert!((reconstructed - prices[i + 1]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_timestamped_at_later_price() {
        let returns = ReturnSeries::from_prices(&series(&[100.0, 101.0])).unwrap();
        assert_eq!(returns.dates()[0], date(2));
    }

    #[test]
    fn test_zero_return_for_flat_prices() {
        let returns = ReturnSeries::from_prices(&series(&[100.0, 100.0])).unwrap();
        assert_eq!(returns.values()[0], 0.0);
    }

    #[test]
    fn test_sample_std_constant_series_is_zero() {
        // Constant prices give constant (zero) returns, so std is 0.
        let returns = ReturnSeries::from_prices(&series(&[50.0, 50.0, 50.0, 50.0])).unwrap();
        assert_eq!(returns.sample_std().unwrap(), 0.0);
    }

    #[test]
    fn test_sample_std_known_value() {
        // Observations [1, 2, 3, 4]: mean 2.5, sample variance 5/3.
        let std = sample_std(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((std - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_sample_std_requires_two_observations() {
        let err = sample_std(&[0.01]).unwrap_err();
        assert!(matches!(
            err,
            VolError::InsufficientData {
                required: 2,
                actual: 1
            }
        ));
    }
}
