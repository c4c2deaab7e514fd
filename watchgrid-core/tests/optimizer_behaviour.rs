//! Behavioural tests for the optimizer seam.

use geo::Coord;
use rstest::rstest;
use watchgrid_core::{
    CoveragePlan, CoverageRequest, OptimizeError, Optimizer, Region, Sensor,
};

/// Optimizer that assigns every in-reach region to every sensor.
///
/// Deliberately naive; it exists to exercise the trait contract, not to
/// produce optimal plans.
struct GreedyOptimizer;

impl Optimizer for GreedyOptimizer {
    fn optimize(&self, request: &CoverageRequest) -> Result<CoveragePlan, OptimizeError> {
        let assignments: Vec<Vec<Region>> = request
            .sensors
            .iter()
            .map(|sensor| {
                request
                    .regions
                    .iter()
                    .filter(|region| sensor.covers(region.location))
                    .cloned()
                    .collect()
            })
            .collect();
        let best = assignments.iter().map(Vec::len).max().unwrap_or(0);
        Ok(CoveragePlan::new(assignments, best))
    }
}

#[rstest]
fn plan_has_one_list_per_sensor() {
    let request = CoverageRequest {
        sensors: vec![
            Sensor::new(0, Coord { x: 0.0, y: 0.0 }, 2.0),
            Sensor::new(1, Coord { x: 9.0, y: 9.0 }, 0.5),
        ],
        regions: vec![Region::new(0, Coord { x: 1.0, y: 1.0 })],
    };
    let plan = GreedyOptimizer.optimize(&request).expect("valid request");
    assert_eq!(plan.assignments().len(), 2);
    assert_eq!(plan.assignments()[0].len(), 1);
    assert!(plan.assignments()[1].is_empty());
}

#[rstest]
fn empty_deployment_yields_empty_plan() {
    let request = CoverageRequest::default();
    let plan = GreedyOptimizer.optimize(&request).expect("valid request");
    assert!(plan.assignments().is_empty());
    assert_eq!(plan.best_coverage(), 0);
}
