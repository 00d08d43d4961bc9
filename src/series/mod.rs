//! Price and return series representations.
//!
//! This module provides:
//! - Validated, immutable price series
//! - Log-return computation

/// Validated close-price series.
pub mod price;

/// Log-return series derived from a price series.
pub mod returns;
