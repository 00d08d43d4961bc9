//! Expected price-range projection.

use crate::types::primitives::{Price, Volatility};

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// One-standard-deviation expected price band plus the daily expected move.
///
/// Under a log-normal price assumption, the one-year band
/// `[P·e^−v, P·e^v]` covers roughly 68% of outcomes, where v is the
/// annualized volatility estimate. The daily move is the raw (daily,
/// non-annualized) standard deviation applied to the current price.
///
/// All values are plain numbers; formatting (currency symbols, percent
/// signs) belongs to the presentation layer.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple)
)]
pub struct RangeProjection {
    /// Price the projection is anchored at.
    pub current_price: Price,

    /// Annualized volatility estimate used for the one-year band.
    pub annual_vol: Volatility,

    /// Upper edge of the one-year 1σ band: `P · e^v`.
    pub upper: Price,

    /// Lower edge of the one-year 1σ band: `P · e^−v`.
    pub lower: Price,

    /// Daily standard deviation of returns (non-annualized), as a fraction
    /// of price.
    pub daily_std: f64,

    /// Expected one-day move in price units: `P × daily_std`.
    pub daily_move: f64,
}

impl RangeProjection {
    /// Projects the expected range from the current price, an annualized
    /// volatility estimate, and the daily return standard deviation.
    ///
    /// `current_price` is positive by the `PriceSeries` invariant.
    #[must_use]
    pub fn new(current_price: Price, annual_vol: Volatility, daily_std: f64) -> Self {
        Self {
            current_price,
            annual_vol,
            upper: current_price * annual_vol.exp(),
            lower: current_price * (-annual_vol).exp(),
            daily_std,
            daily_move: current_price * daily_std,
        }
    }
}
