//! Standard normal distribution primitives shared by the call and put pricers.

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Cumulative distribution function of N(0, 1).
///
/// Evaluated as `0.5 * erfc(-x / sqrt(2))` so the lower tail keeps full relative
/// precision instead of cancelling against 1. Saturates to exactly 0.0 / 1.0 for
/// large |x|; NaN propagates.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / std::f64::consts::SQRT_2)
}

/// Probability density function of N(0, 1).
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cdf_at_zero_is_half() {
        assert_abs_diff_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_cdf_reference_values() {
        // Tabulated values of Phi(x)
        let table = [
            (-3.0, 0.001_349_898_031_630_095),
            (-1.96, 0.024_997_895_148_220_435),
            (-1.0, 0.158_655_253_931_457_05),
            (0.5, 0.691_462_461_274_013_1),
            (1.0, 0.841_344_746_068_542_9),
            (2.0, 0.977_249_868_051_820_8),
        ];
        for (x, expected) in table {
            assert_abs_diff_eq!(norm_cdf(x), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cdf_saturates_without_overflow() {
        assert_eq!(norm_cdf(40.0), 1.0);
        assert_eq!(norm_cdf(-40.0), 0.0);
        assert_eq!(norm_cdf(f64::INFINITY), 1.0);
        assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
        assert!(norm_cdf(-10.0) > 0.0);
        assert!(norm_cdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_cdf_tail_complement() {
        for &x in &[0.1, 0.7, 1.5, 3.0, 6.0, 9.5] {
            assert_abs_diff_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_pdf_values() {
        assert_abs_diff_eq!(norm_pdf(0.0), FRAC_1_SQRT_2PI, epsilon = 1e-16);
        assert_abs_diff_eq!(norm_pdf(1.0), 0.241_970_724_519_143_37, epsilon = 1e-15);
        assert_eq!(norm_pdf(-1.3), norm_pdf(1.3));
        assert_eq!(norm_pdf(100.0), 0.0);
    }
}
