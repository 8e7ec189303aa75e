//! GnomeSort, the naive quadratic baseline.
//!
//! A single cursor walks forward while adjacent pairs are ordered and steps
//! back after swapping an inversion.

pub fn gnome_sort(arr: &mut [i64]) {
    let mut pos = 0;
    while pos < arr.len() {
        if pos == 0 || arr[pos] >= arr[pos - 1] {
            pos += 1;
        } else {
            arr.swap(pos, pos - 1);
            pos -= 1;
        }
    }
}
