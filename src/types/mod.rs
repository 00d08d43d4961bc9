//! Common types and error definitions for the volatility estimation library.
//!
//! This module contains:
//! - Error types using `thiserror`
//! - Type aliases for domain concepts

/// Error types for the volatility estimation library.
pub mod error;

/// Common type aliases for prices, returns, volatility, and dates.
pub mod primitives;
