//! Configuration for Congo Storage
//!
//! Centralized configuration with sensible defaults.

use std::fmt;
use std::str::FromStr;

use crate::error::StorageError;

/// Main configuration for a storage manager and its shell
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Index Configuration
    // -------------------------------------------------------------------------
    /// How the description index treats two items with the same description
    pub description_policy: DescriptionPolicy,

    /// Capacity hint for the id index (`--capacity` on the command line)
    pub initial_capacity: usize,

    // -------------------------------------------------------------------------
    // Shell Configuration
    // -------------------------------------------------------------------------
    /// Title shown at the top of the menu
    pub title: String,

    /// Fallback log filter directive, used when RUST_LOG is unset
    pub log_filter: String,
}

/// Description index policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptionPolicy {
    /// One entry per description; a later insert replaces the earlier one.
    /// The displaced item stays findable by id but drops out of the listing.
    #[default]
    Overwrite,

    /// One entry per (description, id); every item stays in the listing
    KeepAll,
}

impl DescriptionPolicy {
    /// Name accepted by `FromStr` and shown in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            DescriptionPolicy::Overwrite => "overwrite",
            DescriptionPolicy::KeepAll => "keep-all",
        }
    }
}

impl fmt::Display for DescriptionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DescriptionPolicy {
    type Err = StorageError;

    /// Accepts exactly `overwrite` or `keep-all`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overwrite" => Ok(DescriptionPolicy::Overwrite),
            "keep-all" => Ok(DescriptionPolicy::KeepAll),
            other => Err(StorageError::Config(format!(
                "unknown description policy '{}' (expected 'overwrite' or 'keep-all')",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            description_policy: DescriptionPolicy::Overwrite,
            initial_capacity: 0,
            title: "Congo Storage Management".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the description index policy
    pub fn description_policy(mut self, policy: DescriptionPolicy) -> Self {
        self.config.description_policy = policy;
        self
    }

    /// Set the id index capacity hint
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Set the menu title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Set the fallback log filter
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.log_filter = filter.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
