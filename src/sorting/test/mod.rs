//! Tests for sorting implementations

use super::code::SortAlgorithm;
use crate::dataset::{generate, Shape};
use crate::utils::bench::seeded_rng;

/// Verify every candidate against the standard library sort on every shape
pub fn verify_all() -> Result<(), String> {
    let mut rng = seeded_rng(0x5eed);

    for size in [1usize, 2, 10, 257, 1000] {
        for shape in Shape::ALL {
            let dataset = generate(size, shape, &mut rng).map_err(|e| e.to_string())?;
            let mut expected = dataset.working_copy();
            expected.sort();

            for algo in SortAlgorithm::ALL {
                let mut data = dataset.working_copy();
                algo.sort(&mut data).map_err(|e| e.to_string())?;
                if data != expected {
                    return Err(format!(
                        "Variant '{}' failed on {} input of size {}",
                        algo.name(),
                        shape,
                        size
                    ));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;
    use crate::sorting::code::{available_variants, merge_sort_by_key};

    fn is_non_decreasing(v: &[i64]) -> bool {
        v.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should sort correctly");
    }

    #[test]
    fn test_sorted_permutation_for_all_shapes_and_sizes() {
        let mut rng = seeded_rng(2024);
        for size in [1usize, 2, 10, 1000] {
            for shape in Shape::ALL {
                let dataset = generate(size, shape, &mut rng).unwrap();
                let mut multiset = dataset.working_copy();
                multiset.sort_unstable();

                for variant in available_variants() {
                    let mut data = dataset.working_copy();
                    (variant.function)(&mut data);
                    assert!(is_non_decreasing(&data), "{} on {}", variant.name, shape);
                    assert_eq!(data, multiset, "{} lost elements on {}", variant.name, shape);
                }
            }
        }
    }

    #[test]
    fn test_raw_functions_accept_empty() {
        for variant in available_variants() {
            let mut data: Vec<i64> = Vec::new();
            (variant.function)(&mut data);
            assert!(data.is_empty());
        }
    }

    #[test]
    fn test_contract_rejects_empty() {
        for algo in SortAlgorithm::ALL {
            let err = algo.sort(&mut []).unwrap_err();
            assert!(matches!(err, BenchError::InvalidArgument(_)), "{}", algo.name());
        }
    }

    #[test]
    fn test_duplicates_and_negatives() {
        let input = vec![3, -7, 3, 0, -7, 12, 3, 0];
        let mut expected = input.clone();
        expected.sort();
        for algo in SortAlgorithm::ALL {
            let mut data = input.clone();
            algo.sort(&mut data).unwrap();
            assert_eq!(data, expected, "{}", algo.name());
        }
    }

    #[test]
    fn test_merge_sort_is_stable() {
        // (key, original position)
        let mut records: Vec<(i64, usize)> = [5, 1, 5, 3, 1, 5, 0, 3]
            .iter()
            .enumerate()
            .map(|(i, &k)| (k, i))
            .collect();
        merge_sort_by_key(&mut records, |r| r.0);

        for pair in records.windows(2) {
            assert!(pair[0].0 <= pair[1].0);
            if pair[0].0 == pair[1].0 {
                assert!(pair[0].1 < pair[1].1, "equal keys reordered: {:?}", pair);
            }
        }
        assert!(SortAlgorithm::MergeSort.is_stable());
        assert!(!SortAlgorithm::QuickSort.is_stable());
    }

    #[test]
    fn test_independent_copies_give_identical_output() {
        let mut rng = seeded_rng(11);
        let dataset = generate(500, Shape::Random, &mut rng).unwrap();
        for algo in SortAlgorithm::ALL {
            let mut first = dataset.working_copy();
            let mut second = dataset.working_copy();
            algo.sort(&mut first).unwrap();
            algo.sort(&mut second).unwrap();
            assert_eq!(first, second, "{}", algo.name());
        }
    }

    #[test]
    fn test_reverse_sorted_five() {
        let mut rng = seeded_rng(0);
        let dataset = generate(5, Shape::ReverseSorted, &mut rng).unwrap();
        assert_eq!(dataset.values(), &[4, 3, 2, 1, 0]);

        let mut data = dataset.working_copy();
        SortAlgorithm::MergeSort.sort(&mut data).unwrap();
        assert_eq!(data, vec![0, 1, 2, 3, 4]);
    }
}
