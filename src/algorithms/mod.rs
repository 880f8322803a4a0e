//! Ordering algorithms behind list membership queries
//!
//! - [`SortKey`]: numeric-or-text comparison key derived from an element's text
//! - [`quick_sort_paired`]: in-place quicksort that carries values along with keys
//! - [`binary_search_key`]: binary search over sorted keys

pub mod quick_sort;
pub mod sort_key;

pub use quick_sort::{binary_search_key, is_sorted, quick_sort_paired};
pub use sort_key::{NumericKey, SortKey};
