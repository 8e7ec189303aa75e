//! Utility modules for timing, sweeping and export.

pub mod bench;
pub mod cpu_affinity;
pub mod export;
pub mod logging;
pub mod runner;
pub mod timer;

// Re-export commonly used items
pub use bench::{seeded_rng, time_seed, SweepRng};
pub use cpu_affinity::CpuPinGuard;
pub use export::{export_csv, series_for, write_csv};
pub use runner::{
    run_fibonacci_sweep, run_sort_sweep, run_sweep, sample_points, FamilyFilter, SweepReport,
    TrialFailure,
};
pub use timer::{measure, time_scalar, time_sort, TrialOutcome, TrialResult, Workload};

/// Information about an algorithm implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "QuickSort")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}
