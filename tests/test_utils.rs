#![allow(dead_code)] // Not every test binary uses every helper

use bs_greeks::MarketInputs;
use proptest::prelude::*;

/// The reference contract: S=100, K=110, T=1y, r=5%, sigma=20%
pub fn example_inputs() -> MarketInputs {
    MarketInputs::new(100.0, 110.0, 1.0, 0.05, 0.2)
}

/// Relative difference, falling back to absolute near zero
pub fn rel_diff(a: f64, b: f64) -> f64 {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() / scale
}

/// Inputs spanning deep ITM/OTM strikes, short and long expiries, negative rates
/// and low/high volatility.
pub fn valid_inputs() -> impl Strategy<Value = MarketInputs> {
    (
        1.0..500.0f64,
        0.2..2.5f64,
        0.01..10.0f64,
        -0.05..0.15f64,
        0.02..1.5f64,
    )
        .prop_map(|(spot, moneyness, years_to_exp, r, sigma)| {
            MarketInputs::new(spot, spot * moneyness, years_to_exp, r, sigma)
        })
}
