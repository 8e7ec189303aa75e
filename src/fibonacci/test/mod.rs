//! Tests for Fibonacci implementations

use super::code::{FibonacciAlgorithm, FibonacciState, Term};

/// Verify all candidates agree with the exact memoized reference for n <= 40
pub fn verify_all() -> Result<(), String> {
    let mut state = FibonacciState::default();
    let modulus = state.modulus as u128;

    for n in 0..=40i64 {
        let expected = FibonacciAlgorithm::Memoization
            .evaluate(n, &mut state)
            .map_err(|e| e.to_string())?
            .to_u128()
            .ok_or_else(|| format!("F({}) is not exact", n))?;

        for algo in FibonacciAlgorithm::ALL {
            let term = algo.evaluate(n, &mut state).map_err(|e| e.to_string())?;
            let actual = term
                .to_u128()
                .ok_or_else(|| format!("Variant '{}' gave {} for n = {}", algo.name(), term, n))?;
            let reference = if algo.is_modular() {
                expected % modulus
            } else {
                expected
            };
            if actual != reference {
                return Err(format!(
                    "Variant '{}' failed for n = {}: expected {}, got {}",
                    algo.name(),
                    n,
                    reference,
                    actual
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should agree with memoization");
    }

    #[test]
    fn test_memoization_matches_modular() {
        let mut state = FibonacciState::default();
        for n in [0i64, 1, 2, 10, 50] {
            let exact = FibonacciAlgorithm::Memoization
                .evaluate(n, &mut state)
                .unwrap()
                .to_u128()
                .unwrap();
            let reduced = FibonacciAlgorithm::ModularFastDoubling
                .evaluate(n, &mut state)
                .unwrap();
            assert_eq!(Term::Exact(exact % state.modulus as u128), reduced, "n = {}", n);
        }
    }

    #[test]
    fn test_tenth_term() {
        let mut state = FibonacciState::default();
        assert_eq!(
            FibonacciAlgorithm::Memoization.evaluate(10, &mut state).unwrap(),
            Term::Exact(55)
        );
        assert_eq!(
            FibonacciAlgorithm::ModularFastDoubling
                .evaluate(10, &mut state)
                .unwrap(),
            Term::Exact(55)
        );
        let approx = FibonacciAlgorithm::ContinuedFraction
            .evaluate(10, &mut state)
            .unwrap();
        assert!(!approx.is_exact());
        assert_eq!(approx.to_u128(), Some(55));
    }

    #[test]
    fn test_continued_fraction_past_exact_range() {
        let mut state = FibonacciState::default();
        let err = FibonacciAlgorithm::Memoization
            .evaluate(200, &mut state)
            .unwrap_err();
        assert!(matches!(err, BenchError::ArithmeticOverflow(_)));

        let expected = 2.805_711_729_925_101_4e41;
        let approx = FibonacciAlgorithm::ContinuedFraction
            .evaluate(200, &mut state)
            .unwrap();
        assert!(((approx.to_f64() - expected) / expected).abs() < 1e-9);
    }

    #[test]
    fn test_negative_n_rejected() {
        let mut state = FibonacciState::default();
        for algo in FibonacciAlgorithm::ALL {
            let err = algo.evaluate(-1, &mut state).unwrap_err();
            assert!(matches!(err, BenchError::InvalidArgument(_)), "{}", algo.name());
        }
    }

    #[test]
    fn test_cache_persists_between_calls() {
        let mut state = FibonacciState::default();
        FibonacciAlgorithm::Memoization.evaluate(30, &mut state).unwrap();
        assert!(state.cache.contains(30));

        // Later calls reuse earlier terms
        FibonacciAlgorithm::Memoization.evaluate(35, &mut state).unwrap();
        assert_eq!(state.cache.len(), 34);
    }

    #[test]
    fn test_zero_modulus_rejected() {
        let mut state = FibonacciState::new(0);
        let err = FibonacciAlgorithm::ModularFastDoubling
            .evaluate(5, &mut state)
            .unwrap_err();
        assert!(matches!(err, BenchError::InvalidArgument(_)));
    }
}
