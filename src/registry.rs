//! Algorithm registry.
//!
//! Candidates are closed enums ([`SortAlgorithm`], [`FibonacciAlgorithm`]);
//! the registry keeps a fixed, ordered list of each and owns the state the
//! scalar family carries between calls. Call sites never dispatch on names.

use crate::error::Result;
use crate::fibonacci::{FibonacciAlgorithm, FibonacciState, Term, DEFAULT_MODULUS};
use crate::sorting::SortAlgorithm;

/// Metadata and self-check for one algorithm family
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the family (e.g., "sorting")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "sequence", "scalar")
    fn category(&self) -> &'static str;

    /// Names of the candidates in this family
    fn available_variants(&self) -> Vec<&'static str>;

    /// Verify correctness of all candidates against a reference
    fn verify(&self) -> std::result::Result<(), String>;
}

/// A single candidate of either family
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Candidate {
    Sort(SortAlgorithm),
    Fibonacci(FibonacciAlgorithm),
}

impl Candidate {
    pub fn name(&self) -> &'static str {
        match self {
            Candidate::Sort(a) => a.name(),
            Candidate::Fibonacci(a) => a.name(),
        }
    }
}

/// Fixed ordered candidate collections plus the scalar family's state.
pub struct CandidateRegistry {
    families: Vec<Box<dyn AlgorithmRunner>>,
    sorting: Vec<SortAlgorithm>,
    fibonacci: Vec<FibonacciAlgorithm>,
    state: FibonacciState,
}

impl CandidateRegistry {
    /// Registry with every candidate and the given Fibonacci modulus
    pub fn new(modulus: u64) -> Self {
        Self {
            families: vec![
                Box::new(crate::sorting::SortingRunner),
                Box::new(crate::fibonacci::FibonacciRunner),
            ],
            sorting: SortAlgorithm::ALL.to_vec(),
            fibonacci: FibonacciAlgorithm::ALL.to_vec(),
            state: FibonacciState::new(modulus),
        }
    }

    /// Get all registered families
    pub fn families(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.families
    }

    pub fn sort_candidates(&self) -> &[SortAlgorithm] {
        &self.sorting
    }

    pub fn fibonacci_candidates(&self) -> &[FibonacciAlgorithm] {
        &self.fibonacci
    }

    /// Every candidate, sorting family first
    pub fn candidates(&self) -> Vec<Candidate> {
        self.sorting
            .iter()
            .copied()
            .map(Candidate::Sort)
            .chain(self.fibonacci.iter().copied().map(Candidate::Fibonacci))
            .collect()
    }

    pub fn fibonacci_state(&self) -> &FibonacciState {
        &self.state
    }

    pub fn fibonacci_state_mut(&mut self) -> &mut FibonacciState {
        &mut self.state
    }

    /// Evaluate a scalar candidate against the registry-owned state
    pub fn evaluate(&mut self, algo: FibonacciAlgorithm, n: i64) -> Result<Term> {
        algo.evaluate(n, &mut self.state)
    }

    /// Clear the memoization cache so later trials start cold
    pub fn reset_memo(&mut self) {
        self.state.cache.reset();
    }
}

impl Default for CandidateRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MODULUS)
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> CandidateRegistry {
    CandidateRegistry::default()
}
