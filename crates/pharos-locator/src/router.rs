//! The locator's routing table: one continuum per named group.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use pharos_routing::{Continuum, Group};
use tracing::info;

use crate::config::GroupsConfig;
use crate::error::LocatorError;

/// Shared, read-mostly routing table.
///
/// Each named group owns an immutable [`Continuum`]; updates build the
/// replacement outside the lock and swap it in, so lookups only ever observe
/// a complete ring. A rebuild that fails leaves the previous continuum for
/// that group in place.
#[derive(Default)]
pub struct Router {
    continua: RwLock<HashMap<String, Arc<Continuum>>>,
}

impl Router {
    /// Create an empty routing table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a continuum for `group` and publish it under `name`.
    ///
    /// Replaces any previous continuum for that name. On error the table is
    /// untouched.
    pub fn update_group(&self, name: &str, group: &Group) -> Result<(), LocatorError> {
        let continuum = Arc::new(Continuum::new(group)?);

        self.write().insert(name.to_owned(), continuum);
        info!(name, members = group.len(), "routing group updated");

        Ok(())
    }

    /// Remove a group, returning whether it existed.
    ///
    /// Lookups already holding the group's continuum finish normally.
    pub fn remove_group(&self, name: &str) -> bool {
        let removed = self.write().remove(name).is_some();
        if removed {
            info!(name, "routing group removed");
        }
        removed
    }

    /// Publish every group declared in `config`.
    ///
    /// All continua are built before any is published, so a malformed group
    /// leaves the whole table as it was.
    pub fn apply(&self, config: &GroupsConfig) -> Result<(), LocatorError> {
        let mut built = Vec::with_capacity(config.groups.len());
        for (name, group) in &config.groups {
            built.push((name.clone(), Arc::new(Continuum::new(group)?), group.len()));
        }

        let mut continua = self.write();
        for (name, continuum, members) in built {
            info!(name, members, "routing group updated");
            continua.insert(name, continuum);
        }

        Ok(())
    }

    /// Map a key to a member of the named group.
    pub fn route(&self, name: &str, key: &str) -> Result<String, LocatorError> {
        Ok(self.lookup(name)?.get(key).to_owned())
    }

    /// Pick a member of the named group at random, weighted by ring occupancy.
    pub fn route_any(&self, name: &str) -> Result<String, LocatorError> {
        Ok(self.lookup(name)?.pick().to_owned())
    }

    /// Return the continuum currently published under `name`, if any.
    pub fn continuum(&self, name: &str) -> Option<Arc<Continuum>> {
        self.read().get(name).cloned()
    }

    /// Names of all published groups, sorted.
    pub fn group_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    fn lookup(&self, name: &str) -> Result<Arc<Continuum>, LocatorError> {
        self.continuum(name)
            .ok_or_else(|| LocatorError::GroupNotFound(name.to_owned()))
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Arc<Continuum>>> {
        self.continua.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Arc<Continuum>>> {
        self.continua.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("groups", &self.group_names())
            .finish_non_exhaustive()
    }
}
