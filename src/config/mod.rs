//! Configuration APIs for slotlist
//!
//! Lists are tuned through [`ListConfig`]: the capacity a default list
//! starts with, the factor the backing storage grows by, and how eagerly
//! `contains` sorts before searching.
//!
//! # Configuration Trait
//!
//! The [`Config`] trait provides validation, environment initialization,
//! presets and JSON persistence.
//!
//! ```rust
//! use slotlist::config::{Config, ListConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ListConfig::default().with_growth_factor(2.0);
//! config.validate()?;
//!
//! // Initialize from environment variables with SLOTLIST_ prefix
//! let config = ListConfig::from_env()?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod list;


pub use list::{ListConfig, SortCheck, DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR, MAX_DEFAULT_CAPACITY};

/// Prefix used by [`Config::from_env`]
pub const ENV_PREFIX: &str = "SLOTLIST_";

/// Common configuration trait providing validation, environment initialization,
/// and preset management functionality.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables.
    ///
    /// Environment variables use the format `SLOTLIST_{COMPONENT}_{FIELD}`,
    /// for example `SLOTLIST_LIST_GROWTH_FACTOR=2.0`.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Initialize configuration from environment variables with a custom prefix.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Preset favouring fewer growth events over memory footprint.
    fn performance_preset() -> Self;

    /// Preset favouring a small footprint over growth frequency.
    fn memory_preset() -> Self;

    /// Balanced preset, the default for most uses.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Parse an environment variable, falling back to `default` when unset or malformed.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Parse a boolean environment variable.
///
/// Accepts "true", "1", "yes", "on" (case-insensitive) as true,
/// everything else as false.
pub fn parse_env_bool(var_name: &str, default: bool) -> bool {
    env::var(var_name)
        .ok()
        .map(|s| {
            let s = s.to_lowercase();
            matches!(s.as_str(), "true" | "1" | "yes" | "on")
        })
        .unwrap_or(default)
}
