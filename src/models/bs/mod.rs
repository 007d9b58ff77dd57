// Closed-form Black-Scholes pricing of European calls and puts together with
// their first- and second-order sensitivities. Both pricers go through
// `BsTerms` so that d1/d2 and the discount factor are computed exactly once,
// along a single code path.
//
// These functions do not validate their inputs: S <= 0, K <= 0, T <= 0 or
// sigma <= 0 yield NaN or infinite fields rather than a panic. Use the checked
// entry points at the crate root when inputs come from outside.

use crate::models::normal::{norm_cdf, norm_pdf};
use crate::pricing::types::Greeks;

/// Intermediate quantities shared by the call and put formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BsTerms {
    pub d1: f64,
    pub d2: f64,
    /// sqrt(T)
    pub sqrt_t: f64,
    /// e^(-rT)
    pub discount: f64,
}

impl BsTerms {
    #[allow(non_snake_case)]
    pub fn new(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> Self {
        let sqrt_t = T.sqrt();
        let vol_sqrt_t = sigma * sqrt_t;
        let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;
        Self {
            d1,
            d2,
            sqrt_t,
            discount: (-r * T).exp(),
        }
    }
}

// Gamma and vega do not depend on the option side.
#[allow(non_snake_case)]
fn gamma_vega(S: f64, sigma: f64, pdf_d1: f64, terms: &BsTerms) -> (f64, f64) {
    let gamma = pdf_d1 / (S * sigma * terms.sqrt_t);
    let vega = S * pdf_d1 * terms.sqrt_t;
    (gamma, vega)
}

/// Price and Greeks of a European call under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn price_call(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> Greeks {
    let terms = BsTerms::new(S, K, T, r, sigma);
    let nd1 = norm_cdf(terms.d1);
    let nd2 = norm_cdf(terms.d2);
    let pdf_d1 = norm_pdf(terms.d1);
    let (gamma, vega) = gamma_vega(S, sigma, pdf_d1, &terms);

    Greeks {
        price: S * nd1 - K * terms.discount * nd2,
        delta: nd1,
        gamma,
        vega,
        theta: -(S * pdf_d1 * sigma) / (2.0 * terms.sqrt_t)
            - r * K * terms.discount * nd2,
        rho: K * T * terms.discount * nd2,
    }
}

/// Price and Greeks of a European put under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn price_put(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> Greeks {
    let terms = BsTerms::new(S, K, T, r, sigma);
    let nd1 = norm_cdf(terms.d1);
    let n_minus_d1 = norm_cdf(-terms.d1);
    let n_minus_d2 = norm_cdf(-terms.d2);
    let pdf_d1 = norm_pdf(terms.d1);
    let (gamma, vega) = gamma_vega(S, sigma, pdf_d1, &terms);

    Greeks {
        price: -S * n_minus_d1 + K * terms.discount * n_minus_d2,
        delta: nd1 - 1.0,
        gamma,
        vega,
        theta: -(S * pdf_d1 * sigma) / (2.0 * terms.sqrt_t)
            + r * K * terms.discount * n_minus_d2,
        rho: -K * T * terms.discount * n_minus_d2,
    }
}
