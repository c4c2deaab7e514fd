//! Fixed monitoring sensors and their reach predicate.

use geo::Coord;

use crate::euclidean_distance;

/// A fixed sensor that can be credited with monitoring nearby regions.
///
/// The capacity is compared directly against the Euclidean distance to a
/// candidate region, so it behaves as a reach radius: a region is eligible
/// for this sensor when its distance does not exceed `capacity`. A zero
/// capacity only reaches regions at the sensor's exact position; a negative
/// capacity reaches nothing.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use watchgrid_core::Sensor;
///
/// let sensor = Sensor::new(1, Coord { x: 0.0, y: 0.0 }, 5.0);
/// assert!(sensor.covers(Coord { x: 3.0, y: 4.0 }));
/// assert!(!sensor.covers(Coord { x: 3.0, y: 4.1 }));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sensor {
    /// Identifier, unique within a deployment.
    pub id: u64,
    /// Planar position of the sensor.
    pub location: Coord<f64>,
    /// Reach radius used by the eligibility test.
    pub capacity: f64,
}

impl Sensor {
    /// Construct a `Sensor` at `location` with the given reach `capacity`.
    #[must_use]
    pub const fn new(id: u64, location: Coord<f64>, capacity: f64) -> Self {
        Self {
            id,
            location,
            capacity,
        }
    }

    /// Whether a region at `target` is within this sensor's reach.
    ///
    /// Boundary positions count as covered: the comparison is
    /// `distance <= capacity`.
    #[must_use]
    pub fn covers(&self, target: Coord<f64>) -> bool {
        euclidean_distance(self.location, target) <= self.capacity
    }
}
