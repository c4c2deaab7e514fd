//! Coverage requests and the optimizer seam.
//!
//! A [`CoverageRequest`] bundles the sensors and regions of one deployment.
//! The [`Optimizer`] trait is the boundary implemented by solver crates;
//! implementations must be deterministic for identical requests.

use geo::Coord;
use thiserror::Error;

use crate::{CoveragePlan, Region, Sensor};

/// Input aggregate for one optimization run.
///
/// Empty sensor or region sequences are valid and yield an all-empty plan;
/// they are not an error condition.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use watchgrid_core::CoverageRequest;
///
/// let request = CoverageRequest::from_parts(
///     vec![Coord { x: 0.0, y: 0.0 }],
///     vec![Coord { x: 1.0, y: 1.0 }],
///     vec![3.0],
/// )?;
/// assert_eq!(request.sensors.len(), 1);
/// # Ok::<(), watchgrid_core::CoverageRequestError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageRequest {
    /// Deployed sensors, in input order.
    pub sensors: Vec<Sensor>,
    /// Regions to monitor, in input order.
    pub regions: Vec<Region>,
}

/// Errors returned by [`CoverageRequest::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverageRequestError {
    /// The capacity sequence does not line up with the sensor sequence.
    #[error("expected one capacity per sensor: {sensors} sensors, {capacities} capacities")]
    CapacityCountMismatch {
        /// Number of sensor positions supplied.
        sensors: usize,
        /// Number of capacity values supplied.
        capacities: usize,
    },
}

impl CoverageRequest {
    /// Build a request from positionally aligned sequences.
    ///
    /// `capacities[i]` belongs to the sensor at `sensor_positions[i]`.
    /// Sensor and region identifiers are assigned from the input order.
    ///
    /// # Errors
    /// Returns [`CoverageRequestError::CapacityCountMismatch`] when the
    /// capacity sequence length differs from the sensor sequence length,
    /// rather than silently truncating either side.
    pub fn from_parts(
        sensor_positions: Vec<Coord<f64>>,
        region_positions: Vec<Coord<f64>>,
        capacities: Vec<f64>,
    ) -> Result<Self, CoverageRequestError> {
        if sensor_positions.len() != capacities.len() {
            return Err(CoverageRequestError::CapacityCountMismatch {
                sensors: sensor_positions.len(),
                capacities: capacities.len(),
            });
        }
        let sensors = sensor_positions
            .into_iter()
            .zip(capacities)
            .enumerate()
            .map(|(id, (location, capacity))| Sensor::new(id as u64, location, capacity))
            .collect();
        let regions = region_positions
            .into_iter()
            .enumerate()
            .map(|(id, location)| Region::new(id as u64, location))
            .collect();
        Ok(Self { sensors, regions })
    }
}

/// Errors returned by [`Optimizer::optimize`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    /// The request was rejected before optimization started.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] CoverageRequestError),
}

/// Compute an assignment of regions to sensors maximising coverage.
///
/// Implementations must be pure with respect to the request: identical
/// requests yield identical plans. They must return a plan whose
/// assignment list count equals the request's sensor count, and should
/// return [`OptimizeError`] for malformed input rather than panicking.
/// Optimizers must be `Send + Sync` so they can be shared across threads.
pub trait Optimizer: Send + Sync {
    /// Optimize a request, producing a coverage plan or an error.
    fn optimize(&self, request: &CoverageRequest) -> Result<CoveragePlan, OptimizeError>;
}
