//! Weighted consistent-hash routing continuum.
//!
//! This crate implements the continuum the pharos locator uses to map opaque
//! string keys (or a random draw) to a member of a weighted routing group.
//! Each member contributes ring points in proportion to its weight: one hash
//! round yields a "quad" of four 32-bit points, and a member carrying the
//! whole group weight gets 64 rounds.
//!
//! A [`Continuum`] is a pure function of its input [`Group`]: it is built
//! once, never mutated, and replaced wholesale when the group changes. Keyed
//! lookups are `O(log N)` binary searches and safe to run from any number of
//! threads.

mod continuum;
mod error;
mod group;
mod hash;

pub use continuum::{Continuum, Element, Point};
pub use error::RoutingError;
pub use group::Group;
pub use hash::{Md5Hasher, RingHasher, hasher_for};
