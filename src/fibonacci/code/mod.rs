//! Fibonacci implementations.
//!
//! Each candidate computes the n-th Fibonacci term. State shared across
//! calls (the memo cache and the modulus) lives in [`FibonacciState`], which
//! the registry owns.

mod continued_fraction;
mod memoization;
mod modular_matrix;

pub use continued_fraction::{fibonacci_continued_fraction, Approximation};
pub use memoization::{fibonacci_memoization, MemoCache, MAX_EXACT_TERM};
pub use modular_matrix::{fibonacci_modular, DEFAULT_MODULUS};

use std::fmt;

use crate::error::{BenchError, Result};
use crate::utils::VariantInfo;

/// Output of a scalar candidate
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Term {
    /// Exact term, or its residue for modular candidates
    Exact(u128),
    /// Floating-point approximation
    Approximate(Approximation),
}

impl Term {
    pub fn is_exact(&self) -> bool {
        matches!(self, Term::Exact(_))
    }

    /// Integer value, rounding approximations; `None` if it does not fit
    pub fn to_u128(&self) -> Option<u128> {
        match self {
            Term::Exact(v) => Some(*v),
            Term::Approximate(a) => a.to_u128(),
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Term::Exact(v) => *v as f64,
            Term::Approximate(a) => a.to_f64(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Exact(v) => write!(f, "{}", v),
            Term::Approximate(a) => write!(f, "~{}", a),
        }
    }
}

/// State carried between scalar candidate calls
#[derive(Debug, Clone)]
pub struct FibonacciState {
    pub cache: MemoCache,
    pub modulus: u64,
}

impl FibonacciState {
    pub fn new(modulus: u64) -> Self {
        Self {
            cache: MemoCache::new(),
            modulus,
        }
    }
}

impl Default for FibonacciState {
    fn default() -> Self {
        Self::new(DEFAULT_MODULUS)
    }
}

/// Type alias for the scalar candidate signature
pub type FibonacciFn = fn(u64, &mut FibonacciState) -> Result<Term>;

fn run_memoization(n: u64, state: &mut FibonacciState) -> Result<Term> {
    fibonacci_memoization(n, &mut state.cache).map(Term::Exact)
}

fn run_modular(n: u64, state: &mut FibonacciState) -> Result<Term> {
    if state.modulus == 0 {
        return Err(BenchError::invalid("modulus must be positive"));
    }
    Ok(Term::Exact(fibonacci_modular(n, state.modulus) as u128))
}

fn run_continued_fraction(n: u64, _state: &mut FibonacciState) -> Result<Term> {
    fibonacci_continued_fraction(n).map(Term::Approximate)
}

/// The closed set of scalar candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FibonacciAlgorithm {
    Memoization,
    ModularFastDoubling,
    ContinuedFraction,
}

impl FibonacciAlgorithm {
    /// All candidates in registry order
    pub const ALL: [FibonacciAlgorithm; 3] = [
        FibonacciAlgorithm::Memoization,
        FibonacciAlgorithm::ModularFastDoubling,
        FibonacciAlgorithm::ContinuedFraction,
    ];

    pub fn info(&self) -> VariantInfo<FibonacciFn> {
        match self {
            FibonacciAlgorithm::Memoization => VariantInfo {
                name: "Memoization",
                description: "Recursive with a cache kept across calls, exact up to n = 186",
                function: run_memoization,
            },
            FibonacciAlgorithm::ModularFastDoubling => VariantInfo {
                name: "ModularFastDoubling",
                description: "2x2 matrix power by squaring under a fixed modulus, O(log n)",
                function: run_modular,
            },
            FibonacciAlgorithm::ContinuedFraction => VariantInfo {
                name: "ContinuedFraction",
                description: "Golden-ratio continued fraction iterated n times, approximate",
                function: run_continued_fraction,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    /// Whether the result is reduced modulo `FibonacciState::modulus`
    pub fn is_modular(&self) -> bool {
        matches!(self, FibonacciAlgorithm::ModularFastDoubling)
    }

    /// Compute F(n). Negative `n` is rejected.
    pub fn evaluate(&self, n: i64, state: &mut FibonacciState) -> Result<Term> {
        let n = u64::try_from(n).map_err(|_| {
            BenchError::invalid(format!("{} requires n >= 0, got {}", self.name(), n))
        })?;
        (self.info().function)(n, state)
    }
}

/// Get all Fibonacci variants
pub fn available_variants() -> Vec<VariantInfo<FibonacciFn>> {
    FibonacciAlgorithm::ALL.iter().map(|a| a.info()).collect()
}
