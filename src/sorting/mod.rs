//! # Sorting Algorithms
//!
//! Sequence-sorting candidates benchmarked against each dataset shape:
//!
//! - **QuickSort**: Lomuto partition, last-element pivot
//! - **MergeSort**: top-down, stable
//! - **HeapSort**: in-place max-heap
//! - **GnomeSort**: naive quadratic baseline
//!
//! Every candidate must leave a non-decreasing permutation of its input.

pub mod code;
pub mod test;

pub use code::*;

use crate::registry::AlgorithmRunner;

/// Runner for the sorting family
pub struct SortingRunner;

impl AlgorithmRunner for SortingRunner {
    fn name(&self) -> &'static str {
        "sorting"
    }

    fn description(&self) -> &'static str {
        "In-place sorting of integer sequences of a given shape"
    }

    fn category(&self) -> &'static str {
        "sequence"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn verify(&self) -> Result<(), String> {
        test::verify_all()
    }
}
