//! # Slotlist: a resizable, index-addressable list
//!
//! This crate provides [`ArrayList`], a dynamic array built directly on a
//! fixed-length slot array. The logical size is tracked separately from the
//! backing capacity, storage grows geometrically when an insertion finds no
//! free slot, and membership tests sort the list by a numeric-or-text key and
//! binary search it.
//!
//! ## Key Features
//!
//! - **Checked operations**: every mutation validates its arguments first and
//!   reports a [`ListError`], leaving the list untouched on failure
//! - **Configurable growth**: [`ListConfig`] sets the starting capacity, the
//!   growth factor and the sort policy of `contains`
//! - **Sort-then-search membership**: `contains` orders elements by
//!   [`SortKey`] (integers numerically, other text lexicographically)
//!
//! ## Quick Start
//!
//! ```rust
//! use slotlist::ArrayList;
//!
//! let mut list: ArrayList<String> = ArrayList::new();
//! for _ in 0..7 {
//!     list.add("banana".to_string())?;
//! }
//! list.add("cherry".to_string())?;
//!
//! assert_eq!(list.len(), 8);
//! assert_eq!(list.index_of(&"cherry".to_string())?, Some(7));
//!
//! let removed = list.remove_at(3)?;
//! assert_eq!(removed, "banana");
//! assert_eq!(list.len(), 7);
//! # Ok::<(), slotlist::ListError>(())
//! ```

#![warn(missing_docs)]

pub mod algorithms;
pub mod config;
pub mod containers;
pub mod error;

// Re-export core types
pub use algorithms::{NumericKey, SortKey};
pub use config::{Config, ListConfig, SortCheck};
pub use containers::{ArrayList, Iter, MAX_CAPACITY};
pub use error::{ListError, Result};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently only logs the version)
pub fn init() {
    log::debug!("Initializing slotlist v{}", VERSION);
}
