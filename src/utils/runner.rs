//! Sweep driver.
//!
//! Walks the full trial matrix. Sorting: size outer, shape middle, candidate
//! inner, with one dataset generated per (size, shape) and an independent
//! copy handed to every candidate. Fibonacci: sample point outer, candidate
//! inner. A failed trial is logged and recorded; the sweep carries on.

use std::fmt;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::{MemoReset, ScalarSweepConfig, SortSweepConfig, SweepConfig, TimingConfig};
use crate::dataset::generate;
use crate::error::{BenchError, Result};
use crate::fibonacci::FibonacciAlgorithm;
use crate::registry::CandidateRegistry;

use super::bench::{seeded_rng, time_seed};
use super::timer::{time_scalar, time_sort, TrialResult, Workload};

/// A trial that did not produce a result
#[derive(Debug)]
pub struct TrialFailure {
    pub algorithm: &'static str,
    pub workload: Workload,
    pub size: u64,
    pub error: BenchError,
}

impl fmt::Display for TrialFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} (size {}): {}",
            self.algorithm, self.workload, self.size, self.error
        )
    }
}

/// Ordered result log plus the trials that failed
#[derive(Debug, Default)]
pub struct SweepReport {
    pub results: Vec<TrialResult>,
    pub failures: Vec<TrialFailure>,
}

impl SweepReport {
    /// Total trials attempted
    pub fn trial_count(&self) -> usize {
        self.results.len() + self.failures.len()
    }

    /// True when every trial produced a result
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Append another report, keeping order
    pub fn extend(&mut self, other: SweepReport) {
        self.results.extend(other.results);
        self.failures.extend(other.failures);
    }

    fn record(&mut self, algorithm: &'static str, workload: Workload, size: u64, outcome: Result<TrialResult>) {
        match outcome {
            Ok(result) => {
                debug!(
                    event = "trial",
                    algorithm,
                    workload = %workload,
                    size,
                    time_ms = result.time_ms(),
                );
                self.results.push(result);
            }
            Err(error) => {
                warn!(
                    event = "trial_failed",
                    algorithm,
                    workload = %workload,
                    size,
                    error = %error,
                );
                self.failures.push(TrialFailure {
                    algorithm,
                    workload,
                    size,
                    error,
                });
            }
        }
    }
}

/// Which families a sweep covers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FamilyFilter {
    #[default]
    All,
    Sorting,
    Fibonacci,
}

impl FamilyFilter {
    /// Parse a family name as used on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "all" => Some(FamilyFilter::All),
            "sorting" => Some(FamilyFilter::Sorting),
            "fibonacci" => Some(FamilyFilter::Fibonacci),
            _ => None,
        }
    }

    fn includes_sorting(self) -> bool {
        matches!(self, FamilyFilter::All | FamilyFilter::Sorting)
    }

    fn includes_fibonacci(self) -> bool {
        matches!(self, FamilyFilter::All | FamilyFilter::Fibonacci)
    }
}

/// Evenly spaced sample points over `[1, upper_bound]`.
///
/// Uses `1 + i * (upper_bound - 1) / (samples - 1)`; points that coincide
/// when `samples > upper_bound` are collapsed so no trial repeats.
pub fn sample_points(upper_bound: i64, samples: usize) -> Result<Vec<i64>> {
    if upper_bound < 1 {
        return Err(BenchError::invalid(format!(
            "upper bound must be at least 1, got {}",
            upper_bound
        )));
    }
    if samples == 0 {
        return Err(BenchError::invalid("sample count must be at least 1"));
    }
    if samples == 1 {
        return Ok(vec![1]);
    }

    let span = (upper_bound - 1) as i128;
    let last = (samples - 1) as i128;
    let mut points: Vec<i64> = (0..samples as i128)
        .map(|i| 1 + (i * span / last) as i64)
        .collect();
    points.dedup();
    Ok(points)
}

/// Run every sorting candidate over `sizes x shapes`.
pub fn run_sort_sweep<R: Rng + ?Sized>(
    registry: &CandidateRegistry,
    config: &SortSweepConfig,
    timing: &TimingConfig,
    rng: &mut R,
) -> SweepReport {
    let mut report = SweepReport::default();
    let candidates = registry.sort_candidates();

    info!(
        event = "sweep_start",
        family = "sorting",
        sizes = config.sizes.len(),
        shapes = config.shapes.len(),
        candidates = candidates.len(),
    );

    for &size in &config.sizes {
        for &shape in &config.shapes {
            let workload = Workload::Sequence(shape);
            let dataset = match generate(size, shape, rng) {
                Ok(dataset) => dataset,
                Err(e) => {
                    let reason = match e {
                        BenchError::InvalidArgument(msg) => msg,
                        other => other.to_string(),
                    };
                    // Every candidate at this point of the matrix loses its trial
                    for algo in candidates {
                        report.record(
                            algo.name(),
                            workload,
                            size as u64,
                            Err(BenchError::invalid(reason.clone())),
                        );
                    }
                    continue;
                }
            };

            for &algo in candidates {
                let outcome = time_sort(algo, shape, dataset.working_copy(), timing)
                    .map(|o| o.result);
                report.record(algo.name(), workload, size as u64, outcome);
            }
        }
    }

    info!(
        event = "sweep_end",
        family = "sorting",
        results = report.results.len(),
        failures = report.failures.len(),
    );
    report
}

/// Run every Fibonacci candidate at each sample point.
pub fn run_fibonacci_sweep(
    registry: &mut CandidateRegistry,
    config: &ScalarSweepConfig,
    timing: &TimingConfig,
) -> Result<SweepReport> {
    let points = sample_points(config.upper_bound, config.samples)?;
    let candidates = registry.fibonacci_candidates().to_vec();
    let mut report = SweepReport::default();

    info!(
        event = "sweep_start",
        family = "fibonacci",
        samples = points.len(),
        upper_bound = config.upper_bound,
        candidates = candidates.len(),
        memo_reset = ?timing.memo_reset,
    );

    registry.fibonacci_state_mut().modulus = config.modulus;
    if timing.memo_reset == MemoReset::PerSweep {
        registry.reset_memo();
    }

    for &n in &points {
        for &algo in &candidates {
            if algo == FibonacciAlgorithm::Memoization && timing.memo_reset == MemoReset::PerTrial {
                registry.reset_memo();
            }
            let outcome = time_scalar(algo, n, registry.fibonacci_state_mut(), timing)
                .map(|o| o.result);
            report.record(algo.name(), Workload::Scalar, n.unsigned_abs(), outcome);
        }
    }

    info!(
        event = "sweep_end",
        family = "fibonacci",
        results = report.results.len(),
        failures = report.failures.len(),
    );
    Ok(report)
}

/// Run the configured sweep for the selected families.
///
/// Seeds the dataset generator from `config.seed`, or from the clock when no
/// seed is set (the chosen seed is logged so the run can be repeated).
pub fn run_sweep(
    registry: &mut CandidateRegistry,
    config: &SweepConfig,
    filter: FamilyFilter,
) -> Result<SweepReport> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(time_seed);
    info!(event = "sweep_seed", seed);

    let mut report = SweepReport::default();
    if filter.includes_sorting() {
        let mut rng = seeded_rng(seed);
        report.extend(run_sort_sweep(registry, &config.sorting, &config.timing, &mut rng));
    }
    if filter.includes_fibonacci() {
        report.extend(run_fibonacci_sweep(registry, &config.fibonacci, &config.timing)?);
    }
    Ok(report)
}
