//! # Fibonacci Algorithms
//!
//! Scalar candidates computing the n-th Fibonacci term `F(n)`:
//!
//! - **Memoization**: exact, O(n) on a cold cache, cache persists across calls
//! - **ModularFastDoubling**: `F(n) mod m`, O(log n)
//! - **ContinuedFraction**: floating-point approximation, O(n) iterations
//!
//! Timings for Memoization depend on what earlier calls left in the cache;
//! see [`crate::config::MemoReset`] for controlling that between trials.

pub mod code;
pub mod test;

pub use code::*;

use crate::registry::AlgorithmRunner;

/// Runner for the Fibonacci family
pub struct FibonacciRunner;

impl AlgorithmRunner for FibonacciRunner {
    fn name(&self) -> &'static str {
        "fibonacci"
    }

    fn description(&self) -> &'static str {
        "n-th Fibonacci term by memoization, modular matrix power and continued fraction"
    }

    fn category(&self) -> &'static str {
        "scalar"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn verify(&self) -> Result<(), String> {
        test::verify_all()
    }
}
