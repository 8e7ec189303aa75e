//! # Micro-Sweep-Algo
//!
//! Benchmark harness that sweeps interchangeable algorithm implementations
//! over generated inputs of controlled size and shape, timing each trial and
//! collecting one result record per (size, shape, candidate).

pub mod config;
pub mod dataset;
pub mod error;
pub mod fibonacci;
pub mod registry;
pub mod sorting;
pub mod utils;

pub use error::{BenchError, Result};

/// Re-export run_sweep from utils::runner
pub use utils::runner::run_sweep;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::{MemoReset, SweepConfig, TimingConfig};
    pub use crate::dataset::{generate, Dataset, Shape};
    pub use crate::fibonacci::{FibonacciAlgorithm, Term};
    pub use crate::registry::{build_registry, AlgorithmRunner, Candidate, CandidateRegistry};
    pub use crate::sorting::SortAlgorithm;
    pub use crate::utils::{FamilyFilter, SweepReport, TrialResult, Workload};
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::utils::{seeded_rng, time_scalar, time_sort, write_csv};

    #[test]
    fn test_all_families_registry_verify() {
        let registry = build_registry();
        let families = registry.families();

        println!("Verifying {} families...", families.len());

        for family in families {
            println!("Verifying family: {}", family.name());
            match family.verify() {
                Ok(_) => println!("  ✅ Family '{}' passed verification", family.name()),
                Err(e) => panic!("  ❌ Family '{}' failed verification: {}", family.name(), e),
            }
        }
    }

    #[test]
    fn test_end_to_end_scenarios() {
        let timing = TimingConfig::default();
        let mut rng = seeded_rng(1);

        let sorted = generate(10, Shape::Sorted, &mut rng).unwrap();
        let outcome = time_sort(SortAlgorithm::QuickSort, Shape::Sorted, sorted.working_copy(), &timing)
            .unwrap();
        assert_eq!(outcome.output, sorted.values());
        assert!(outcome.result.time_ms() >= 0.0);

        let reverse = generate(5, Shape::ReverseSorted, &mut rng).unwrap();
        assert_eq!(reverse.values(), &[4, 3, 2, 1, 0]);
        let outcome = time_sort(
            SortAlgorithm::MergeSort,
            Shape::ReverseSorted,
            reverse.working_copy(),
            &timing,
        )
        .unwrap();
        assert_eq!(outcome.output, vec![0, 1, 2, 3, 4]);

        let mut registry = build_registry();
        let memo = time_scalar(
            FibonacciAlgorithm::Memoization,
            10,
            registry.fibonacci_state_mut(),
            &timing,
        )
        .unwrap();
        assert_eq!(memo.output, Term::Exact(55));
        let modular = time_scalar(
            FibonacciAlgorithm::ModularFastDoubling,
            10,
            registry.fibonacci_state_mut(),
            &timing,
        )
        .unwrap();
        assert_eq!(modular.output, Term::Exact(55 % 1_000_000_007));
    }

    #[test]
    fn test_sweep_to_csv() {
        let config = SweepConfig::from_toml_str(
            r#"
            seed = 3
            [sorting]
            sizes = [10, 50]
            [fibonacci]
            upper_bound = 30
            samples = 3
            "#,
        )
        .unwrap();

        let mut registry = build_registry();
        let report = crate::run_sweep(&mut registry, &config, FamilyFilter::All).unwrap();
        assert!(report.is_complete());
        assert_eq!(report.results.len(), 2 * 4 * 4 + 3 * 3);

        let mut buf = Vec::new();
        write_csv(&mut buf, &report.results).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), report.results.len() + 1);
        assert!(text.contains("GnomeSort,NearlySorted,50,"));
        assert!(text.contains("ContinuedFraction,Scalar,30,"));
    }
}
