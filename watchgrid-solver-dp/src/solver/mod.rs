//! [`DpOptimizer`] implementation over the coverage table.

use watchgrid_core::{CoveragePlan, CoverageRequest, OptimizeError, Optimizer, Region};

use crate::table::CoverageTable;

/// Dynamic-programming optimizer maximising the number of covered regions.
///
/// For each sensor the final assignment is read at the last region
/// boundary, so every plan has exactly one list per sensor. Time is
/// `O(n * m^2)` for `n` sensors and `m` regions; the parent-pointer table
/// keeps space at `O(n * m)`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use watchgrid_core::{CoverageRequest, Optimizer};
/// use watchgrid_solver_dp::DpOptimizer;
///
/// let request = CoverageRequest::from_parts(
///     vec![Coord { x: 0.0, y: 0.0 }],
///     vec![Coord { x: 1.0, y: 1.0 }, Coord { x: 8.0, y: 8.0 }],
///     vec![3.0],
/// )?;
/// let plan = DpOptimizer::new().optimize(&request)?;
/// assert_eq!(plan.assignments().len(), 1);
/// assert_eq!(plan.best_coverage(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct DpOptimizer;

impl DpOptimizer {
    /// Construct the optimizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Fill and return the coverage table for `request` without
    /// reconstructing assignment lists.
    ///
    /// Exposed so callers and tests can inspect intermediate coverage
    /// counts; [`Optimizer::optimize`] is the usual entry point.
    #[must_use]
    pub fn build_table(&self, request: &CoverageRequest) -> CoverageTable {
        CoverageTable::build(request)
    }
}

impl Optimizer for DpOptimizer {
    fn optimize(&self, request: &CoverageRequest) -> Result<CoveragePlan, OptimizeError> {
        let table = self.build_table(request);
        let boundary = request.regions.len();
        log::debug!(
            "filled coverage table: {} sensors x {} regions",
            table.sensors(),
            table.regions(),
        );

        let assignments: Vec<Vec<Region>> = (1..=request.sensors.len())
            .map(|sensor| {
                table
                    .assigned_regions(sensor, boundary)
                    .into_iter()
                    .map(|k| request.regions[k].clone())
                    .collect()
            })
            .collect();
        let best_coverage = table.count(request.sensors.len(), boundary);
        log::debug!("best coverage: {best_coverage} of {boundary} regions");
        Ok(CoveragePlan::new(assignments, best_coverage))
    }
}
