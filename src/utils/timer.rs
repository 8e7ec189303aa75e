//! Timing runner for single trials.
//!
//! A trial runs one candidate once on one input. The monotonic clock starts
//! immediately before the candidate is invoked and stops as soon as it
//! returns. There are no retries and no timeouts: a failing candidate aborts
//! its own trial and nothing else.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::config::TimingConfig;
use crate::dataset::Shape;
use crate::error::Result;
use crate::fibonacci::{FibonacciAlgorithm, FibonacciState, Term};
use crate::sorting::SortAlgorithm;

use super::cpu_affinity::CpuPinGuard;

/// What kind of input a trial ran on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Workload {
    /// A generated sequence of the given shape
    Sequence(Shape),
    /// A single integer argument
    Scalar,
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Workload::Sequence(shape) => f.write_str(shape.name()),
            Workload::Scalar => f.write_str("Scalar"),
        }
    }
}

/// Result of one trial. Read-only once created.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialResult {
    algorithm: &'static str,
    workload: Workload,
    size: u64,
    time_ms: f64,
}

impl TrialResult {
    pub(crate) fn new(algorithm: &'static str, workload: Workload, size: u64, elapsed: Duration) -> Self {
        Self {
            algorithm,
            workload,
            size,
            time_ms: duration_to_ms(elapsed),
        }
    }

    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    pub fn workload(&self) -> Workload {
        self.workload
    }

    /// Sequence length, or `n` for scalar trials
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Elapsed wall-clock time in fractional milliseconds
    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }
}

/// A trial's record plus whatever the candidate produced
#[derive(Clone, Debug)]
pub struct TrialOutcome<T> {
    pub result: TrialResult,
    pub output: T,
}

/// Run `f` once, returning its wall-clock duration and value.
#[inline(always)]
pub fn measure<F, R>(f: F) -> (Duration, R)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let value = black_box(f());
    (start.elapsed(), value)
}

/// Convert a duration to fractional milliseconds
pub fn duration_to_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1_000.0
}

/// Time one sorting candidate on its own copy of a dataset.
///
/// `input` is consumed: the caller hands over an independent copy and gets
/// the sorted sequence back in the outcome.
pub fn time_sort(
    algo: SortAlgorithm,
    shape: Shape,
    mut input: Vec<i64>,
    config: &TimingConfig,
) -> Result<TrialOutcome<Vec<i64>>> {
    let size = input.len() as u64;
    let (elapsed, status) = {
        let _pin = config.pin_to_core.then(CpuPinGuard::new);
        measure(|| algo.sort(black_box(input.as_mut_slice())))
    };
    status?;

    Ok(TrialOutcome {
        result: TrialResult::new(algo.name(), Workload::Sequence(shape), size, elapsed),
        output: input,
    })
}

/// Time one Fibonacci candidate for argument `n`.
pub fn time_scalar(
    algo: FibonacciAlgorithm,
    n: i64,
    state: &mut FibonacciState,
    config: &TimingConfig,
) -> Result<TrialOutcome<Term>> {
    let (elapsed, value) = {
        let _pin = config.pin_to_core.then(CpuPinGuard::new);
        measure(|| algo.evaluate(black_box(n), state))
    };
    let value = value?;

    Ok(TrialOutcome {
        result: TrialResult::new(algo.name(), Workload::Scalar, n.unsigned_abs(), elapsed),
        output: value,
    })
}
