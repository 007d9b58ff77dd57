//! # bs-greeks: Closed-form Black-Scholes Pricing and Greeks
//!
//! `bs-greeks` evaluates the Black-Scholes formula for European calls and puts and
//! returns the premium together with its sensitivities (Delta, Gamma, Vega, Theta,
//! Rho) from five scalar inputs: spot, strike, time to expiry, risk-free rate and
//! volatility.
//!
//! ## Core Features
//!
//! - **Call / Put pricers**: pure functions sharing one d1/d2 computation, so the two
//!   sides can never drift apart numerically
//! - **Standard normal primitives**: full-precision CDF and PDF
//! - **Checked entry points**: explicit "invalid input" errors instead of NaN
//! - **Reporting**: fixed-precision text rendering (2 decimals for Price, 4 for Greeks)
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_greeks::{price_call, price_put, try_price_call, MarketInputs};
//!
//! // S=100, K=110, T=1y, r=5%, sigma=20%
//! let call = price_call(100.0, 110.0, 1.0, 0.05, 0.2);
//! let put = price_put(100.0, 110.0, 1.0, 0.05, 0.2);
//! assert!((call.price - 6.04).abs() < 5e-3);
//! assert!((put.price - 10.68).abs() < 5e-3);
//!
//! // Validated variant
//! let bad = MarketInputs::new(100.0, 110.0, 1.0, 0.05, 0.0);
//! assert!(try_price_call(&bad).is_err());
//! ```
//!
//! ## Unchecked vs. checked
//!
//! [`price_call`] and [`price_put`] perform no validation. Non-positive spot, strike,
//! expiry or volatility produce NaN / infinite fields, never a panic. The
//! `try_*` functions and [`price_option`] reject such inputs up front with a
//! [`PricingError`].

// ================================================================================================
// MODULES
// ================================================================================================

pub mod models;
pub mod pricing;
pub mod report;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use models::bs::{price_call, price_put, BsTerms};
pub use models::normal::{norm_cdf, norm_pdf};
pub use pricing::error::PricingError;
pub use pricing::types::{Greeks, MarketInputs, OptionType};
pub use report::DisplayConfig;

#[cfg(feature = "serde")]
pub use pricing::config::DemoConfig;

// ================================================================================================
// CHECKED ENTRY POINTS
// ================================================================================================

/// Price a European call after validating the inputs.
///
/// # Errors
///
/// Returns the first violated precondition, checked in the order spot, strike,
/// expiry, volatility, rate. See [`MarketInputs::validate`].
pub fn try_price_call(inputs: &MarketInputs) -> Result<Greeks, PricingError> {
    price_option(OptionType::Call, inputs)
}

/// Price a European put after validating the inputs.
///
/// # Errors
///
/// Same as [`try_price_call`].
pub fn try_price_put(inputs: &MarketInputs) -> Result<Greeks, PricingError> {
    price_option(OptionType::Put, inputs)
}

/// Validate `inputs` and dispatch to the call or put pricer.
///
/// # Example
///
/// ```rust
/// use bs_greeks::{price_option, MarketInputs, OptionType};
///
/// let inputs = MarketInputs::new(100.0, 100.0, 0.5, 0.01, 0.25);
/// let call = price_option(OptionType::Call, &inputs)?;
/// let put = price_option("put".parse()?, &inputs)?;
/// assert!((call.delta - put.delta - 1.0).abs() < 1e-12);
/// # Ok::<(), bs_greeks::PricingError>(())
/// ```
pub fn price_option(
    option_type: OptionType,
    inputs: &MarketInputs,
) -> Result<Greeks, PricingError> {
    if let Err(e) = inputs.validate() {
        tracing::warn!(%option_type, error = %e, "rejecting pricing request");
        return Err(e);
    }

    tracing::debug!(
        %option_type,
        spot = inputs.spot,
        strike = inputs.strike,
        years_to_exp = inputs.years_to_exp,
        r = inputs.r,
        sigma = inputs.sigma,
        "pricing European option"
    );

    let MarketInputs {
        spot,
        strike,
        years_to_exp,
        r,
        sigma,
    } = *inputs;

    let greeks = match option_type {
        OptionType::Call => price_call(spot, strike, years_to_exp, r, sigma),
        OptionType::Put => price_put(spot, strike, years_to_exp, r, sigma),
    };
    Ok(greeks)
}
