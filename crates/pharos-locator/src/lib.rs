//! Named routing groups for the pharos locator.
//!
//! This crate is the consumer side of [`pharos_routing`]: a [`Router`] owns
//! one continuum per named routing group and rebuilds it wholesale whenever
//! the group definition changes. Group definitions can be declared in TOML
//! via [`GroupsConfig`].
//!
//! Continua are never mutated in place. An update builds the replacement
//! first and swaps it in under a short write lock; readers holding the
//! previous instance finish with a stale but coherent snapshot, and a failed
//! rebuild leaves the existing routing untouched.

mod config;
mod error;
mod router;

pub use config::GroupsConfig;
pub use error::LocatorError;
pub use router::Router;
