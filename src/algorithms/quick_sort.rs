//! In-place quicksort and binary search over key-ordered data
//!
//! The sort works on two parallel slices: the keys drive every comparison
//! and each swap is mirrored into the value slice, so the values end up in
//! key order without the keys having to be recomputed.

/// Check whether keys are in non-decreasing order
#[inline]
pub fn is_sorted<K: Ord>(keys: &[K]) -> bool {
    keys.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Sort `keys` ascending in place, applying every swap to `values` as well
///
/// Classic quicksort with the last element of each partition as pivot.
/// The smaller side is sorted recursively and the larger side iteratively,
/// so stack depth stays logarithmic even on adversarial input.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn quick_sort_paired<K: Ord, V>(keys: &mut [K], values: &mut [V]) {
    assert_eq!(
        keys.len(),
        values.len(),
        "key and value slices must have equal length"
    );

    let mut keys = keys;
    let mut values = values;

    while keys.len() > 1 {
        let pivot = partition(keys, values);

        let (left_keys, right_keys) = std::mem::take(&mut keys).split_at_mut(pivot);
        let (left_values, right_values) = std::mem::take(&mut values).split_at_mut(pivot);
        // Skip the pivot, it is already in its final slot
        let right_keys = &mut right_keys[1..];
        let right_values = &mut right_values[1..];

        if left_keys.len() < right_keys.len() {
            quick_sort_paired(left_keys, left_values);
            keys = right_keys;
            values = right_values;
        } else {
            quick_sort_paired(right_keys, right_values);
            keys = left_keys;
            values = left_values;
        }
    }
}

/// Lomuto partition around the last element, returns the pivot's final index
fn partition<K: Ord, V>(keys: &mut [K], values: &mut [V]) -> usize {
    let high = keys.len() - 1;
    let mut store = 0;

    for j in 0..high {
        if keys[j] <= keys[high] {
            keys.swap(store, j);
            values.swap(store, j);
            store += 1;
        }
    }

    keys.swap(store, high);
    values.swap(store, high);
    store
}

/// Binary search over sorted keys
///
/// Returns the first probed index whose key equals `target`. With duplicate
/// keys that is not necessarily the lowest or highest matching index.
pub fn binary_search_key<K: Ord>(keys: &[K], target: &K) -> Option<usize> {
    let mut low = 0;
    let mut high = keys.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match keys[mid].cmp(target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }

    None
}
