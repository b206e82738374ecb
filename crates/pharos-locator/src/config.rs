//! TOML definitions for routing groups.
//!
//! A groups file declares one table per group, mapping member names to
//! positive weights:
//!
//! ```toml
//! [groups.app]
//! "node-a" = 2.0
//! "node-b" = 1.0
//!
//! [groups.cache]
//! "cache-1" = 1.0
//! ```
//!
//! Weights are validated when a continuum is built, not at parse time, so a
//! file can be loaded and inspected before any group is applied.

use std::collections::BTreeMap;
use std::path::Path;

use pharos_routing::Group;
use serde::Deserialize;

use crate::error::LocatorError;

/// Routing group definitions parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GroupsConfig {
    /// Routing groups keyed by name.
    pub groups: BTreeMap<String, Group>,
}

impl GroupsConfig {
    /// Load group definitions from a TOML file.
    pub fn load(path: &Path) -> Result<Self, LocatorError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Parse group definitions from a TOML string.
    pub fn from_toml(raw: &str) -> Result<Self, LocatorError> {
        Ok(toml::from_str(raw)?)
    }
}
