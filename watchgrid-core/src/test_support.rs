//! Test-only deployment builders shared by unit, behaviour, and property
//! tests.

use geo::Coord;

use crate::{CoverageRequest, Region, Sensor};

/// Build a sensor at `(x, y)` with the given reach capacity.
#[must_use]
pub fn sensor_at(id: u64, x: f64, y: f64, capacity: f64) -> Sensor {
    Sensor::new(id, Coord { x, y }, capacity)
}

/// Build a region at `(x, y)`.
#[must_use]
pub fn region_at(id: u64, x: f64, y: f64) -> Region {
    Region::new(id, Coord { x, y })
}

/// The reference deployment used in regression tests: three sensors on a
/// diagonal with six candidate regions between them.
#[must_use]
pub fn sample_deployment() -> CoverageRequest {
    CoverageRequest {
        sensors: vec![
            sensor_at(0, 0.0, 0.0, 3.0),
            sensor_at(1, 5.0, 5.0, 2.0),
            sensor_at(2, 10.0, 10.0, 2.0),
        ],
        regions: vec![
            region_at(0, 1.0, 1.0),
            region_at(1, 2.0, 2.0),
            region_at(2, 3.0, 3.0),
            region_at(3, 6.0, 6.0),
            region_at(4, 7.0, 7.0),
            region_at(5, 8.0, 8.0),
        ],
    }
}
