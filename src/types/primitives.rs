//! Primitive type aliases for volatility estimation domain concepts.

/// Calendar date of a price observation (trading day).
pub type Date = chrono::NaiveDate;

/// Closing price of the asset, represented as f64. Always positive.
pub type Price = f64;

/// Natural logarithm of the ratio of consecutive prices, represented as f64.
pub type LogReturn = f64;

/// Annualized volatility value, represented as f64. Always non-negative.
pub type Volatility = f64;

/// EWMA decay factor (alpha), represented as f64. In (0, 1].
pub type DecayFactor = f64;
