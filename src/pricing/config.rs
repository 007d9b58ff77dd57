use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::pricing::types::MarketInputs;
use crate::report::DisplayConfig;

#[derive(Debug, Deserialize)]
struct RawInputs {
    #[serde(default = "default_spot")]
    spot: f64,
    #[serde(default = "default_strike")]
    strike: f64,
    #[serde(default = "default_years_to_exp")]
    years_to_exp: f64,
    #[serde(default = "default_rate")]
    r: f64,
    #[serde(default = "default_sigma")]
    sigma: f64,
}

impl Default for RawInputs {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            strike: default_strike(),
            years_to_exp: default_years_to_exp(),
            r: default_rate(),
            sigma: default_sigma(),
        }
    }
}

impl From<RawInputs> for MarketInputs {
    fn from(raw: RawInputs) -> Self {
        MarketInputs::new(raw.spot, raw.strike, raw.years_to_exp, raw.r, raw.sigma)
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawDemoConfig {
    #[serde(default)]
    inputs: RawInputs,
    #[serde(default)]
    display: DisplayConfig,
}

/// Inputs and display settings for the demo driver.
///
/// Every TOML key is optional; missing keys fall back to the example contract
/// (S=100, K=110, T=1, r=0.05, sigma=0.2) and 2/4 decimal display.
///
/// ```toml
/// [inputs]
/// spot = 100.0
/// strike = 95.0
///
/// [display]
/// greek_decimals = 6
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DemoConfig {
    pub inputs: MarketInputs,
    pub display: DisplayConfig,
}

impl DemoConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let raw: RawDemoConfig = toml::from_str(s).context("Failed to parse demo config")?;
        Ok(Self {
            inputs: raw.inputs.into(),
            display: raw.display,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
    }
}

fn default_spot() -> f64 {
    100.0
}

fn default_strike() -> f64 {
    110.0
}

fn default_years_to_exp() -> f64 {
    1.0
}

fn default_rate() -> f64 {
    0.05
}

fn default_sigma() -> f64 {
    0.2
}
