//! Error types for the checked pricing entry points.

use thiserror::Error;

/// Input rejected before any formula is evaluated.
///
/// The unchecked pricers never produce this; they let NaN / Inf flow through
/// instead.
///
/// # Examples
/// ```
/// use bs_greeks::PricingError;
///
/// let err = PricingError::InvalidVolatility { sigma: 0.0 };
/// assert!(err.to_string().contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    #[error("Invalid input: spot price must be positive and finite, got S = {spot}")]
    InvalidSpot { spot: f64 },

    #[error("Invalid input: strike must be positive and finite, got K = {strike}")]
    InvalidStrike { strike: f64 },

    #[error("Invalid input: time to expiry must be positive and finite, got T = {years_to_exp}")]
    InvalidExpiry { years_to_exp: f64 },

    #[error("Invalid input: volatility must be positive and finite, got sigma = {sigma}")]
    InvalidVolatility { sigma: f64 },

    #[error("Invalid input: {name} must be finite, got {value}")]
    NonFiniteInput { name: &'static str, value: f64 },

    #[error("Invalid option type: {0}")]
    InvalidOptionType(String),
}
