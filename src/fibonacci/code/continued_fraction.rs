//! Floating-point Fibonacci approximation.
//!
//! The golden ratio is approached through its continued fraction
//! `1 + 1/(1 + 1/(1 + ...))`, iterated `n` times, and F(n) is then read off
//! Binet's formula. Exact after rounding for moderate `n`; past that the
//! 53-bit mantissa makes the result approximate. Terms beyond the `f64`
//! range are carried as a decimal mantissa and exponent.

use std::fmt;

use crate::error::{BenchError, Result};

const SQRT_5: f64 = 2.236_067_977_499_79;

/// Approximate value `mantissa * 10^exponent`.
///
/// While the value fits in an `f64` the exponent is 0 and the mantissa holds
/// the rounded value itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Approximation {
    mantissa: f64,
    exponent: u64,
}

impl Approximation {
    fn from_value(value: f64) -> Self {
        Self {
            mantissa: value,
            exponent: 0,
        }
    }

    fn from_log10(log10: f64) -> Self {
        let mut exponent = log10.floor();
        let mut mantissa = 10f64.powf(log10 - exponent);
        if mantissa >= 10.0 {
            mantissa /= 10.0;
            exponent += 1.0;
        }
        Self {
            mantissa,
            exponent: exponent as u64,
        }
    }

    pub fn mantissa(&self) -> f64 {
        self.mantissa
    }

    pub fn exponent(&self) -> u64 {
        self.exponent
    }

    /// Value as `f64`, infinite once it leaves the `f64` range
    pub fn to_f64(&self) -> f64 {
        if self.exponent == 0 {
            self.mantissa
        } else {
            self.mantissa * 10f64.powf(self.exponent as f64)
        }
    }

    /// Rounded value as `u128`, if it fits
    pub fn to_u128(&self) -> Option<u128> {
        let value = self.to_f64();
        (value.is_finite() && value < u128::MAX as f64).then(|| value as u128)
    }
}

impl fmt::Display for Approximation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent == 0 {
            write!(f, "{}", self.mantissa)
        } else {
            write!(f, "{}e{}", self.mantissa, self.exponent)
        }
    }
}

pub fn fibonacci_continued_fraction(n: u64) -> Result<Approximation> {
    if n <= 1 {
        return Ok(Approximation::from_value(n as f64));
    }

    let mut phi = 1.0_f64;
    for _ in 0..n {
        phi = 1.0 + 1.0 / phi;
    }
    let psi = 1.0 - phi;

    if let Ok(exp) = i32::try_from(n) {
        let value = ((phi.powi(exp) - psi.powi(exp)) / SQRT_5).round();
        if value.is_finite() {
            return Ok(Approximation::from_value(value));
        }
    }

    // psi^n has vanished long before phi^n leaves the f64 range
    let log10 = n as f64 * phi.log10() - SQRT_5.log10();
    if !log10.is_finite() {
        return Err(BenchError::overflow(format!(
            "F({}) has no finite approximation",
            n
        )));
    }
    Ok(Approximation::from_log10(log10))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative_error(actual: f64, expected: f64) -> f64 {
        ((actual - expected) / expected).abs()
    }

    #[test]
    fn test_first_terms() {
        let expected = [0u128, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, &f) in expected.iter().enumerate() {
            let approx = fibonacci_continued_fraction(n as u64).unwrap();
            assert_eq!(approx.to_u128(), Some(f), "n = {}", n);
            assert_eq!(approx.exponent(), 0);
        }
    }

    #[test]
    fn test_beyond_u128_is_approximate() {
        // F(200) = 280571172992510140037611932413038677189525
        let approx = fibonacci_continued_fraction(200).unwrap();
        assert_eq!(approx.exponent(), 0);
        assert!(relative_error(approx.to_f64(), 2.805_711_729_925_101_4e41) < 1e-9);
        assert_eq!(approx.to_u128(), None);
    }

    #[test]
    fn test_beyond_f64_range() {
        // F(1500) = 1.3551125668563101...e313
        let approx = fibonacci_continued_fraction(1500).unwrap();
        assert_eq!(approx.exponent(), 313);
        assert!(relative_error(approx.mantissa(), 1.355_112_566_856_310_1) < 1e-9);
        assert!(approx.to_f64().is_infinite());

        // F(16000) = 2.8363446223711178...e3343
        let approx = fibonacci_continued_fraction(16_000).unwrap();
        assert_eq!(approx.exponent(), 3343);
        assert!(relative_error(approx.mantissa(), 2.836_344_622_371_117_8) < 1e-6);
        assert_eq!(approx.to_string(), format!("{}e3343", approx.mantissa()));
    }
}
