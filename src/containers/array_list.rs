//! ArrayList: resizable list over a fixed-length slot array
//!
//! The list owns a boxed slice of `Option<T>` slots. The first `len` slots
//! always hold live elements and every slot past them is `None`. When an
//! insertion finds no free slot the whole slot array is replaced by a larger
//! one, `growth_factor` times the logical size, and the live prefix is moved
//! across.
//!
//! Membership is answered by sorting the live prefix by [`SortKey`] (only
//! when it is not already in order) and binary searching it, so `contains`
//! can reorder the list.

use super::iter::Iter;
use crate::algorithms::{binary_search_key, is_sorted, quick_sort_paired, SortKey};
use crate::config::{Config, ListConfig, SortCheck};
use crate::error::{check_bounds, check_insert_position, require, ListError, Result};
use std::fmt;
use std::ops::Index;

/// Capacity reached by a growth event from `len` live elements
///
/// `round(len * factor)`, but never less than `len + 1` so that small sizes,
/// where rounding would stall at the current value, still grow.
#[inline]
pub(crate) fn grown_capacity(len: usize, factor: f64) -> usize {
    // Float-to-int casts saturate, so huge products clamp to usize::MAX
    let scaled = (len as f64 * factor).round() as usize;
    scaled.max(len.saturating_add(1))
}

/// Maximum number of slots a list may hold
pub const MAX_CAPACITY: usize = isize::MAX as usize;

/// Capacity of the next growth event, clamped to [`MAX_CAPACITY`]
#[inline]
fn next_capacity(len: usize, factor: f64) -> Result<usize> {
    if len >= MAX_CAPACITY {
        return Err(ListError::out_of_memory(len.saturating_add(1)));
    }
    Ok(grown_capacity(len, factor).min(MAX_CAPACITY))
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    (0..capacity).map(|_| None).collect()
}

/// Like [`empty_slots`], but reports allocation failure instead of aborting
fn try_empty_slots<T>(capacity: usize) -> Result<Box<[Option<T>]>> {
    if capacity > MAX_CAPACITY {
        return Err(ListError::out_of_memory(capacity));
    }

    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| ListError::out_of_memory(capacity))?;
    slots.resize_with(capacity, || None);
    Ok(slots.into_boxed_slice())
}

/// Resizable, index-addressable list
///
/// Element arguments are taken as `impl Into<Option<T>>`: a plain value is
/// present, `None` is rejected with [`ListError::NullArgument`]. Every
/// argument is validated before the list is touched, so a failing call
/// leaves size, capacity and contents unchanged.
///
/// # Concurrency
///
/// `contains` sorts in place and therefore needs `&mut self`. A list can not
/// be searched through a shared reference, so sharing one between threads
/// requires external synchronization such as a `Mutex`:
///
/// ```compile_fail
/// use slotlist::ArrayList;
///
/// let list: ArrayList<String> = ArrayList::new();
/// let shared = &list;
/// shared.contains(&"banana".to_string());
/// ```
///
/// # Examples
///
/// ```rust
/// use slotlist::ArrayList;
///
/// let mut list: ArrayList<String> = ArrayList::new();
/// list.add("banana".to_string())?;
/// list.add("apple".to_string())?;
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get(0)?, "banana");
///
/// // contains sorts the list before searching
/// assert!(list.contains(&"banana".to_string())?);
/// assert_eq!(list.to_string(), "[apple, banana]");
/// # Ok::<(), slotlist::ListError>(())
/// ```
#[derive(Clone)]
pub struct ArrayList<T> {
    slots: Box<[Option<T>]>,
    len: usize,
    config: ListConfig,
}

impl<T> ArrayList<T> {
    /// Create an empty list with the default capacity of 10
    pub fn new() -> Self {
        let config = ListConfig::default();
        Self {
            slots: empty_slots(config.default_capacity),
            len: 0,
            config,
        }
    }

    /// Create an empty list with room for `capacity` elements
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidCapacity`] if `capacity` is negative and
    /// [`ListError::OutOfMemory`] if storage for it can not be allocated.
    pub fn with_capacity(capacity: isize) -> Result<Self> {
        let slots = usize::try_from(capacity)
            .map_err(|_| ListError::invalid_capacity(capacity))?;

        Ok(Self {
            slots: try_empty_slots(slots)?,
            len: 0,
            config: ListConfig::default(),
        })
    }

    /// Create an empty list tuned by `config`
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Configuration`] if the configuration is invalid.
    pub fn with_config(config: ListConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            slots: try_empty_slots(config.default_capacity)?,
            len: 0,
            config,
        })
    }

    /// Create a list holding a copy of `items`, with capacity equal to their count
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        items.iter().cloned().collect()
    }

    /// Number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing storage
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Configuration the list was built with
    #[inline]
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Append `item` after the last element, growing the storage if it is full
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NullArgument`] if `item` is `None` and
    /// [`ListError::OutOfMemory`] if the storage is full and can not grow.
    pub fn add(&mut self, item: impl Into<Option<T>>) -> Result<&T> {
        let item = require(item.into(), "add")?;

        if self.len == self.capacity() {
            self.grow()?;
        }

        let index = self.len;
        self.len += 1;
        let stored: &T = self.slots[index].insert(item);
        Ok(stored)
    }

    /// Insert `item` at `index`, shifting the elements from `index` onwards right
    ///
    /// Only existing positions are accepted: inserting at `len()` fails, use
    /// [`add`](Self::add) to append.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NullArgument`] if `item` is `None` and
    /// [`ListError::IndexOutOfRange`] if `index >= len()`. Growing full
    /// storage can fail with [`ListError::OutOfMemory`].
    pub fn insert(&mut self, index: usize, item: impl Into<Option<T>>) -> Result<&T> {
        let item = require(item.into(), "insert")?;
        check_insert_position(index, self.len)?;

        if self.len == self.capacity() {
            self.grow()?;
        }

        self.slots[self.len] = Some(item);
        self.len += 1;
        self.slots[index..self.len].rotate_right(1);
        self.live(index)
    }

    /// Replace the element at `index`, returning the displaced value
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NullArgument`] if `item` is `None` and
    /// [`ListError::IndexOutOfRange`] if `index >= len()`.
    pub fn set(&mut self, index: usize, item: impl Into<Option<T>>) -> Result<T> {
        let item = require(item.into(), "set")?;
        check_bounds(index, self.len)?;

        self.slots[index]
            .replace(item)
            .ok_or_else(|| ListError::index_out_of_range(index, self.len))
    }

    /// Remove and return the element at `index`, closing the gap
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        check_bounds(index, self.len)?;

        let removed = self.slots[index].take();
        // Moves the emptied slot to the end of the live prefix
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;

        removed.ok_or_else(|| ListError::index_out_of_range(index, self.len + 1))
    }

    /// Element at `index`
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.live(index)
    }

    /// Drop every element; capacity is kept
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Fixed-length copy of exactly the live elements
    pub fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Forward cursor over the live elements
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots[..self.len])
    }

    fn live(&self, index: usize) -> Result<&T> {
        check_bounds(index, self.len)?;
        self.slots[index]
            .as_ref()
            .ok_or_else(|| ListError::index_out_of_range(index, self.len))
    }

    #[cold]
    fn grow(&mut self) -> Result<()> {
        let new_capacity = next_capacity(self.len, self.config.growth_factor)?;
        let mut grown = try_empty_slots(new_capacity).map_err(|e| {
            log::warn!("Failed to grow list storage to {} slots", new_capacity);
            e
        })?;

        log::debug!(
            "Growing list storage from {} to {} slots",
            self.capacity(),
            new_capacity
        );
        for (target, source) in grown.iter_mut().zip(&mut self.slots[..self.len]) {
            *target = source.take();
        }
        self.slots = grown;
        Ok(())
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Lowest index holding a value equal to `item`
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NullArgument`] if `item` is `None`.
    pub fn index_of<'a>(&self, item: impl Into<Option<&'a T>>) -> Result<Option<usize>>
    where
        T: 'a,
    {
        let item = require(item.into(), "index_of")?;
        Ok(self.iter().position(|x| x == item))
    }

    /// Highest index holding a value equal to `item`, index 0 included
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NullArgument`] if `item` is `None`.
    pub fn last_index_of<'a>(&self, item: impl Into<Option<&'a T>>) -> Result<Option<usize>>
    where
        T: 'a,
    {
        let item = require(item.into(), "last_index_of")?;
        Ok(self.iter().rposition(|x| x == item))
    }

    /// Remove the first element equal to `item` and return it
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NullArgument`] if `item` is `None` and
    /// [`ListError::NotFound`] if no element matches.
    pub fn remove_item<'a>(&mut self, item: impl Into<Option<&'a T>>) -> Result<T>
    where
        T: 'a,
    {
        let item = require(item.into(), "remove_item")?;
        let index = self
            .iter()
            .position(|x| x == item)
            .ok_or_else(|| ListError::not_found("remove_item"))?;
        self.remove_at(index)
    }
}

impl<T: PartialEq + fmt::Display> ArrayList<T> {
    /// Check membership by sorting the list and binary searching it
    ///
    /// The live elements are ordered by [`SortKey`]. If they are already in
    /// order (and the config does not ask for [`SortCheck::Always`]) nothing
    /// moves; otherwise the list is quicksorted in place first. Elements
    /// sharing a key with `item` are then compared by value.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NullArgument`] if `item` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotlist::ArrayList;
    ///
    /// let mut list = ArrayList::from(vec![15, 0, -1, 1, 1, 1]);
    /// assert!(list.contains(&-1)?);
    /// assert_eq!(list.to_string(), "[-1, 0, 1, 1, 1, 15]");
    /// # Ok::<(), slotlist::ListError>(())
    /// ```
    pub fn contains<'a>(&mut self, item: impl Into<Option<&'a T>>) -> Result<bool>
    where
        T: 'a,
    {
        let item = require(item.into(), "contains")?;
        if self.len == 0 {
            return Ok(false);
        }

        let mut keys: Vec<SortKey> = self.iter().map(SortKey::of).collect();
        if self.config.sort_check == SortCheck::Always || !is_sorted(&keys) {
            log::trace!("Sorting {} elements before membership search", self.len);
            quick_sort_paired(&mut keys, &mut self.slots[..self.len]);
        }

        let target = SortKey::of(item);
        let Some(hit) = binary_search_key(&keys, &target) else {
            return Ok(false);
        };

        let run_start = keys[..hit]
            .iter()
            .rposition(|key| *key != target)
            .map_or(0, |i| i + 1);
        let run_end = keys[hit..]
            .iter()
            .position(|key| *key != target)
            .map_or(keys.len(), |i| hit + i);

        Ok(self.slots[run_start..run_end]
            .iter()
            .flatten()
            .any(|x| x == item))
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(items: Vec<T>) -> Self {
        let slots: Box<[Option<T>]> = items.into_iter().map(Some).collect();
        Self {
            len: slots.len(),
            slots,
            config: ListConfig::default(),
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// # Panics
///
/// Panics if `index >= len()`. Use [`ArrayList::get`] for a checked lookup.
impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.slots[..self.len][index].as_ref() {
            Some(item) => item,
            None => unreachable!("live slot {} is empty", index),
        }
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
