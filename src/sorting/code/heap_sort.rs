//! In-place HeapSort over a max-heap. Not stable.

pub fn heap_sort(arr: &mut [i64]) {
    let n = arr.len();
    for root in (0..n / 2).rev() {
        sift_down(arr, n, root);
    }
    for end in (1..n).rev() {
        arr.swap(0, end);
        sift_down(arr, end, 0);
    }
}

/// Restore the heap property for the subtree at `root` within `arr[..len]`.
fn sift_down(arr: &mut [i64], len: usize, mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < len && arr[left] > arr[largest] {
            largest = left;
        }
        if right < len && arr[right] > arr[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }
        arr.swap(root, largest);
        root = largest;
    }
}
