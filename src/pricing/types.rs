use std::fmt;
use std::str::FromStr;

use crate::pricing::error::PricingError;

/// The five scalar market inputs of the Black-Scholes formula.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketInputs {
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub years_to_exp: f64,
    /// Annualized risk-free rate as decimal, any sign (r)
    pub r: f64,
    /// Annualized volatility as decimal (sigma)
    pub sigma: f64,
}

impl MarketInputs {
    pub fn new(spot: f64, strike: f64, years_to_exp: f64, r: f64, sigma: f64) -> Self {
        Self {
            spot,
            strike,
            years_to_exp,
            r,
            sigma,
        }
    }

    /// Check the pricing preconditions, reporting the first violation in the
    /// order S, K, T, sigma, r.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.spot > 0.0 && self.spot.is_finite()) {
            return Err(PricingError::InvalidSpot { spot: self.spot });
        }
        if !(self.strike > 0.0 && self.strike.is_finite()) {
            return Err(PricingError::InvalidStrike {
                strike: self.strike,
            });
        }
        if !(self.years_to_exp > 0.0 && self.years_to_exp.is_finite()) {
            return Err(PricingError::InvalidExpiry {
                years_to_exp: self.years_to_exp,
            });
        }
        if !(self.sigma > 0.0 && self.sigma.is_finite()) {
            return Err(PricingError::InvalidVolatility { sigma: self.sigma });
        }
        if !self.r.is_finite() {
            return Err(PricingError::NonFiniteInput {
                name: "r",
                value: self.r,
            });
        }
        Ok(())
    }
}

/// The example contract used by the demo: S=100, K=110, T=1y, r=5%, sigma=20%.
impl Default for MarketInputs {
    fn default() -> Self {
        Self::new(100.0, 110.0, 1.0, 0.05, 0.2)
    }
}

/// Price and sensitivities of a single European option.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Option premium, in the currency of the underlying
    pub price: f64,
    /// dPrice/dS
    pub delta: f64,
    /// d2Price/dS2
    pub gamma: f64,
    /// dPrice/dsigma, per unit of volatility
    pub vega: f64,
    /// Time decay per year, as -dPrice/dT
    pub theta: f64,
    /// dPrice/dr, per unit of rate
    pub rho: f64,
}

impl Greeks {
    /// Field labels paired with their values, in display order.
    pub fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("Price", self.price),
            ("Delta", self.delta),
            ("Gamma", self.gamma),
            ("Vega", self.vega),
            ("Theta", self.theta),
            ("Rho", self.rho),
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.is_finite())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidOptionType(s.to_string())),
        }
    }
}
