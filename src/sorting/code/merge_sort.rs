//! Top-down MergeSort. Stable: ties take the left run first.

pub fn merge_sort(arr: &mut [i64]) {
    merge_sort_by_key(arr, |&x| x);
}

/// Stable merge sort ordering elements by `key`.
///
/// Generic so stability can be checked on records carrying a payload.
pub fn merge_sort_by_key<T, K, F>(arr: &mut [T], key: F)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K + Copy,
{
    if arr.len() < 2 {
        return;
    }
    let mid = arr.len().div_ceil(2);
    merge_sort_by_key(&mut arr[..mid], key);
    merge_sort_by_key(&mut arr[mid..], key);
    merge(arr, mid, key);
}

fn merge<T, K, F>(arr: &mut [T], mid: usize, key: F)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    // Scratch buffer sized to the merged span
    let mut merged = Vec::with_capacity(arr.len());
    let (mut i, mut j) = (0, mid);

    while i < mid && j < arr.len() {
        if key(&arr[i]) <= key(&arr[j]) {
            merged.push(arr[i].clone());
            i += 1;
        } else {
            merged.push(arr[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&arr[i..mid]);
    merged.extend_from_slice(&arr[j..]);

    arr.clone_from_slice(&merged);
}
