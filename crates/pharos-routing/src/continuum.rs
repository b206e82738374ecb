//! The routing continuum: a sorted ring of weighted replica points.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::RoutingError;
use crate::group::Group;
use crate::hash::{self, Md5Hasher, RingHasher};

/// A coordinate on the ring, covering the full `[0, 2^32)` space.
pub type Point = u32;

/// Base number of hash rounds for a member carrying the whole group weight.
///
/// Each round contributes a quad of four ring points, so a singleton group
/// populates `4 * 64 = 256` points.
const BASE_ROUNDS: usize = 64;

/// A single entry on the continuum.
///
/// The derived ordering — `point` first, `value` second — is the ring's sort
/// order; stabilizing ties on `value` keeps [`Continuum::all`] reproducible
/// when two members collide on a point.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Element {
    /// Ring coordinate.
    pub point: Point,
    /// Name of the group member owning this point.
    pub value: String,
}

/// A weighted consistent-hash ring over a routing group.
///
/// Each member contributes `4 * lround(weight / total * 64 * member_count)`
/// points, derived from successive 16-byte hashes of its name. Lookups walk
/// to the smallest point strictly greater than the target, wrapping to the
/// front of the ring.
///
/// The element sequence is immutable after construction: [`get`](Self::get)
/// and [`all`](Self::all) are safe from any number of threads, and
/// [`pick`](Self::pick) serializes its RNG access internally. When the group
/// changes, build a new continuum and replace this one wholesale.
pub struct Continuum {
    elements: Vec<Element>,
    hasher: Arc<dyn RingHasher>,
    rng: Mutex<StdRng>,
}

impl Continuum {
    /// Build a continuum over `group` using the default MD5 hash.
    ///
    /// Fails with [`RoutingError::InvalidGroup`] when the group is empty or
    /// its total weight is not positive. Construction performs no I/O.
    pub fn new(group: &Group) -> Result<Self, RoutingError> {
        Self::with_hasher(group, Arc::new(Md5Hasher))
    }

    /// Build a continuum with an explicit [`RingHasher`].
    pub fn with_hasher(
        group: &Group,
        hasher: Arc<dyn RingHasher>,
    ) -> Result<Self, RoutingError> {
        let length = group.len();
        let weight = group.total_weight();

        debug!(
            members = length,
            total_weight = weight,
            "populating continuum"
        );

        if length == 0 || weight < f64::EPSILON {
            return Err(RoutingError::InvalidGroup);
        }

        let mut elements = Vec::new();

        for (value, member_weight) in group.iter() {
            let slice = member_weight / weight;

            // Proportional number of hash rounds for this member. Rounding is
            // half away from zero; at least one member always lands on a
            // positive count since the slices sum to 1.
            let steps = (slice * (BASE_ROUNDS * length) as f64).round() as u64;

            if steps == 0 {
                warn!(value, "member weight rounds to zero steps, unreachable");
                continue;
            }

            for step in 0..steps {
                let digest = hasher.hash16(&[value.as_bytes(), &step.to_le_bytes()]);

                for point in hash::quad(digest) {
                    elements.push(Element {
                        point,
                        value: value.to_string(),
                    });
                }
            }

            debug!(
                value,
                quads = steps,
                weight_pct = slice * 100.0,
                "added quads for member"
            );
        }

        // Sort by (point, value) to enable binary searching; the secondary
        // key pins the order of equal-point collisions.
        elements.sort();

        let unique = elements.windows(2).all(|pair| pair[0].point != pair[1].point);

        debug!(
            points = elements.len(),
            unique, "resulting continuum population"
        );

        Ok(Self {
            elements,
            hasher,
            rng: Mutex::new(StdRng::from_os_rng()),
        })
    }

    /// Replace the keyless-draw RNG with a deterministically seeded one.
    pub fn seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ..self
        }
    }

    /// Map a key to a member.
    ///
    /// The target point is the XOR of the four little-endian 32-bit words of
    /// the key's 16-byte hash; the result is the member owning the smallest
    /// ring point strictly greater than the target. Pure: the same key on
    /// the same continuum always yields the same member.
    pub fn get(&self, key: &str) -> &str {
        let point = hash::fold(self.hasher.hash16(&[key.as_bytes()]));
        let element = self.locate(point);

        debug!(
            key,
            point,
            mapped = element.point,
            value = %element.value,
            "hashed key mapped"
        );

        &element.value
    }

    /// Pick a member at random, weighted by ring occupancy.
    ///
    /// Draws a uniform point and applies the same upper-bound rule as
    /// [`get`](Self::get), so over many draws each member is returned in
    /// proportion to the number of ring points it owns.
    pub fn pick(&self) -> &str {
        let point = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random::<Point>();
        let element = self.locate(point);

        debug!(
            point,
            mapped = element.point,
            value = %element.value,
            "random point mapped"
        );

        &element.value
    }

    /// The ring contents in `(point, value)` order.
    pub fn all(&self) -> &[Element] {
        &self.elements
    }

    /// Total number of points on the ring.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the ring has no points. Never true for a built continuum.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Smallest element with `point > target`, wrapping to the front.
    fn locate(&self, target: Point) -> &Element {
        let index = self.elements.partition_point(|element| element.point <= target);
        self.elements.get(index).unwrap_or(&self.elements[0])
    }
}

impl fmt::Debug for Continuum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Continuum")
            .field("points", &self.elements.len())
            .finish_non_exhaustive()
    }
}
