//! Error handling for the slotlist library
//!
//! Every fallible list operation reports one of the variants below. Errors
//! are raised before any mutation takes place, so a failed call leaves the
//! list exactly as it was.

use thiserror::Error;

/// Main error type for the slotlist library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// A required element argument was absent
    #[error("Null argument passed to {operation}")]
    NullArgument {
        /// Name of the operation that rejected the argument
        operation: &'static str,
    },

    /// Index outside the accessible range of the operation
    #[error("Index out of range: index {index}, size {size}")]
    IndexOutOfRange {
        /// The invalid index
        index: usize,
        /// The logical size at the time of the call
        size: usize,
    },

    /// Value-based lookup found no matching element
    #[error("Element not found in {operation}")]
    NotFound {
        /// Name of the operation that searched
        operation: &'static str,
    },

    /// Negative initial capacity at construction
    #[error("Invalid capacity: {requested}")]
    InvalidCapacity {
        /// The rejected capacity
        requested: isize,
    },

    /// Backing storage of the requested size could not be allocated
    #[error("Out of memory: could not allocate {slots} slots")]
    OutOfMemory {
        /// Number of slots requested
        slots: usize,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl ListError {
    /// Create a null argument error
    pub fn null_argument(operation: &'static str) -> Self {
        Self::NullArgument { operation }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, size: usize) -> Self {
        Self::IndexOutOfRange { index, size }
    }

    /// Create a not found error
    pub fn not_found(operation: &'static str) -> Self {
        Self::NotFound { operation }
    }

    /// Create an invalid capacity error
    pub fn invalid_capacity(requested: isize) -> Self {
        Self::InvalidCapacity { requested }
    }

    /// Create an out of memory error
    pub fn out_of_memory(slots: usize) -> Self {
        Self::OutOfMemory { slots }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Check if the caller can retry with corrected input on the same list
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NullArgument { .. } => true,
            Self::IndexOutOfRange { .. } => true,
            Self::NotFound { .. } => true,
            Self::InvalidCapacity { .. } => false,
            Self::OutOfMemory { .. } => true,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::NullArgument { .. } => "argument",
            Self::IndexOutOfRange { .. } => "bounds",
            Self::NotFound { .. } => "lookup",
            Self::InvalidCapacity { .. } => "capacity",
            Self::OutOfMemory { .. } => "memory",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ListError>;

/// Assert that an index addresses a live element
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(ListError::index_out_of_range(index, size))
    } else {
        Ok(())
    }
}

/// Assert that an index is a valid insertion point
///
/// Insertion is only allowed at an existing position, so the end position
/// `size` is rejected just like any index past it.
#[inline]
pub fn check_insert_position(index: usize, size: usize) -> Result<()> {
    check_bounds(index, size)
}

/// Unwrap an element argument or report it as null
#[inline]
pub fn require<T>(item: Option<T>, operation: &'static str) -> Result<T> {
    item.ok_or_else(|| ListError::null_argument(operation))
}
