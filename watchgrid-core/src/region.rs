//! Monitoring regions: the objects being covered.

use geo::Coord;

/// A region that sensors compete to monitor.
///
/// Regions carry only a position; eligibility is decided entirely by the
/// reach of each [`Sensor`](crate::Sensor).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Identifier, unique within a deployment.
    pub id: u64,
    /// Planar position of the region.
    pub location: Coord<f64>,
}

impl Region {
    /// Construct a `Region` at `location`.
    #[must_use]
    pub const fn new(id: u64, location: Coord<f64>) -> Self {
        Self { id, location }
    }
}
