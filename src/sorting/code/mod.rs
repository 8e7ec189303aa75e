//! Sorting implementations.
//!
//! Each candidate sorts a slice of `i64` in place.

mod gnome_sort;
mod heap_sort;
mod merge_sort;
mod quick_sort;

pub use gnome_sort::gnome_sort;
pub use heap_sort::heap_sort;
pub use merge_sort::{merge_sort, merge_sort_by_key};
pub use quick_sort::quick_sort;

use crate::error::{BenchError, Result};
use crate::utils::VariantInfo;

/// Type alias for the in-place sort signature
pub type SortFn = fn(&mut [i64]);

/// The closed set of sequence-sorting candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    QuickSort,
    MergeSort,
    HeapSort,
    GnomeSort,
}

impl SortAlgorithm {
    /// All candidates in registry order
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::QuickSort,
        SortAlgorithm::MergeSort,
        SortAlgorithm::HeapSort,
        SortAlgorithm::GnomeSort,
    ];

    pub fn info(&self) -> VariantInfo<SortFn> {
        match self {
            SortAlgorithm::QuickSort => VariantInfo {
                name: "QuickSort",
                description: "Lomuto partition, last element as pivot (O(n^2) on sorted input)",
                function: quick_sort,
            },
            SortAlgorithm::MergeSort => VariantInfo {
                name: "MergeSort",
                description: "Top-down stable merge sort with scratch buffer",
                function: merge_sort,
            },
            SortAlgorithm::HeapSort => VariantInfo {
                name: "HeapSort",
                description: "In-place max-heap sort",
                function: heap_sort,
            },
            SortAlgorithm::GnomeSort => VariantInfo {
                name: "GnomeSort",
                description: "Naive single-cursor exchange sort, O(n^2)",
                function: gnome_sort,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    /// Only MergeSort keeps equal keys in input order.
    pub fn is_stable(&self) -> bool {
        matches!(self, SortAlgorithm::MergeSort)
    }

    /// Sort `data` in place. Empty input is rejected.
    pub fn sort(&self, data: &mut [i64]) -> Result<()> {
        if data.is_empty() {
            return Err(BenchError::invalid(format!(
                "{} requires a non-empty sequence",
                self.name()
            )));
        }
        (self.info().function)(data);
        Ok(())
    }
}

/// Get all sorting variants
pub fn available_variants() -> Vec<VariantInfo<SortFn>> {
    SortAlgorithm::ALL.iter().map(|a| a.info()).collect()
}
