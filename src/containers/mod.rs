//! Container types
//!
//! - **`ArrayList<T>`** - Resizable list over a fixed-length slot array with
//!   configurable growth and sort-then-search membership
//! - **`Iter<'a, T>`** - Forward cursor over an `ArrayList`

mod array_list;
mod iter;

pub use array_list::{ArrayList, MAX_CAPACITY};
pub use iter::Iter;
