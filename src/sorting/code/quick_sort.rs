//! QuickSort with a Lomuto partition around the last element.
//!
//! The pivot choice is fixed on purpose: sorted and reverse-sorted inputs
//! hit the quadratic worst case, which is exactly what the shape sweep is
//! meant to expose. Not stable.

/// Sort `arr` in place.
///
/// # Example
/// ```
/// use micro_sweep_algo::sorting::quick_sort;
///
/// let mut v = [3, -1, 2, 2, 0];
/// quick_sort(&mut v);
/// assert_eq!(v, [-1, 0, 2, 2, 3]);
/// ```
pub fn quick_sort(arr: &mut [i64]) {
    let mut slice = arr;
    // Recurse into the smaller side, loop on the larger one: the partitions
    // are the same, but stack depth stays logarithmic on the worst case.
    while slice.len() > 1 {
        let pivot = partition(slice);
        let (left, rest) = std::mem::take(&mut slice).split_at_mut(pivot);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quick_sort(left);
            slice = right;
        } else {
            quick_sort(right);
            slice = left;
        }
    }
}

/// Lomuto partition; returns the pivot's final index.
fn partition(arr: &mut [i64]) -> usize {
    let last = arr.len() - 1;
    let pivot = arr[last];
    let mut store = 0;
    for j in 0..last {
        if arr[j] <= pivot {
            arr.swap(store, j);
            store += 1;
        }
    }
    arr.swap(store, last);
    store
}
