//! List configuration: starting capacity, growth factor and sort policy.

use super::{parse_env_bool, parse_env_var, Config};
use crate::error::{ListError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Capacity of a list built with `ArrayList::new`
pub const DEFAULT_CAPACITY: usize = 10;

/// Factor applied to the logical size on every growth event
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.5;

/// Upper bound accepted for `default_capacity`
pub const MAX_DEFAULT_CAPACITY: usize = 1 << 24;

/// When `contains` sorts the list before searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortCheck {
    /// Scan for an out-of-order pair and sort only if one exists
    #[default]
    Lazy,
    /// Sort on every call
    Always,
}

/// Configuration for `ArrayList`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Slots allocated up front by a default-constructed list
    pub default_capacity: usize,
    /// Multiplier applied to the logical size when storage runs out
    pub growth_factor: f64,
    /// Sort policy of `contains`
    pub sort_check: SortCheck,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            sort_check: SortCheck::Lazy,
        }
    }
}

impl ListConfig {
    /// Set the starting capacity
    pub fn with_default_capacity(mut self, capacity: usize) -> Self {
        self.default_capacity = capacity;
        self
    }

    /// Set the growth factor
    pub fn with_growth_factor(mut self, factor: f64) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Set the sort policy of `contains`
    pub fn with_sort_check(mut self, sort_check: SortCheck) -> Self {
        self.sort_check = sort_check;
        self
    }
}

impl Config for ListConfig {
    fn validate(&self) -> Result<()> {
        if !self.growth_factor.is_finite() || self.growth_factor <= 1.0 {
            return Err(ListError::configuration(format!(
                "growth_factor must be a finite value greater than 1.0, got {}",
                self.growth_factor
            )));
        }
        if self.default_capacity > MAX_DEFAULT_CAPACITY {
            return Err(ListError::configuration(format!(
                "default_capacity {} exceeds maximum {}",
                self.default_capacity, MAX_DEFAULT_CAPACITY
            )));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.default_capacity = parse_env_var(
            &format!("{}LIST_DEFAULT_CAPACITY", prefix),
            config.default_capacity,
        );
        config.growth_factor =
            parse_env_var(&format!("{}LIST_GROWTH_FACTOR", prefix), config.growth_factor);
        if parse_env_bool(&format!("{}LIST_ALWAYS_SORT", prefix), false) {
            config.sort_check = SortCheck::Always;
        }
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            default_capacity: 64,
            growth_factor: 2.0,
            sort_check: SortCheck::Lazy,
        }
    }

    fn memory_preset() -> Self {
        Self {
            default_capacity: 4,
            growth_factor: 1.25,
            sort_check: SortCheck::Lazy,
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            ListError::configuration(format!("Failed to serialize list config: {}", e))
        })?;
        std::fs::write(path, serialized).map_err(|e| {
            ListError::configuration(format!("Failed to write list config file: {}", e))
        })?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ListError::configuration(format!("Failed to read list config file: {}", e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ListError::configuration(format!("Failed to parse list config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}
