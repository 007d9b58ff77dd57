//! Plain-text rendering of pricing results.
//!
//! Currency-denominated fields (Price) are printed with
//! [`DisplayConfig::price_decimals`] decimals, every sensitivity with
//! [`DisplayConfig::greek_decimals`]. The defaults are 2 and 4.

use std::fmt::Write;

use crate::pricing::types::{Greeks, OptionType};

/// Number of decimals used when printing a [`Greeks`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct DisplayConfig {
    /// Decimals for currency-denominated fields (Price)
    #[cfg_attr(feature = "serde", serde(default = "default_price_decimals"))]
    pub price_decimals: usize,

    /// Decimals for sensitivities (Delta, Gamma, Vega, Theta, Rho)
    #[cfg_attr(feature = "serde", serde(default = "default_greek_decimals"))]
    pub greek_decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            price_decimals: default_price_decimals(),
            greek_decimals: default_greek_decimals(),
        }
    }
}

fn default_price_decimals() -> usize {
    2
}

fn default_greek_decimals() -> usize {
    4
}

/// Label / formatted value pairs, in Price, Delta, Gamma, Vega, Theta, Rho order.
pub fn format_fields(greeks: &Greeks, display: DisplayConfig) -> Vec<(&'static str, String)> {
    greeks
        .fields()
        .into_iter()
        .map(|(label, value)| {
            let decimals = if label == "Price" {
                display.price_decimals
            } else {
                display.greek_decimals
            };
            (label, format!("{:.*}", decimals, value))
        })
        .collect()
}

/// Titled block with a dashed rule and one `Label : value` line per field.
pub fn render(option_type: OptionType, greeks: &Greeks, display: DisplayConfig) -> String {
    let side = match option_type {
        OptionType::Call => "Call",
        OptionType::Put => "Put",
    };

    let mut out = String::new();
    let _ = writeln!(out, "Black-Scholes results (European {}):", side);
    let _ = writeln!(out, "{}", "-".repeat(50));
    for (label, value) in format_fields(greeks, display) {
        let _ = writeln!(out, "{} : {}", label, value);
    }
    out
}
