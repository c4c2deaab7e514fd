//! Golden regression tests pinning optimizer output for known deployments.
//!
//! If one of these fails after an intentional algorithm change, update the
//! expectations deliberately; they encode observable behaviour callers
//! depend on, including the first-index tie-break.

use rstest::rstest;
use watchgrid_core::test_support::{region_at, sample_deployment, sensor_at};
use watchgrid_core::{CoverageRequest, Optimizer};
use watchgrid_solver_dp::DpOptimizer;

#[rstest]
fn diagonal_deployment_plan_is_stable() {
    let plan = DpOptimizer::new()
        .optimize(&sample_deployment())
        .expect("optimize should succeed");

    assert_eq!(
        plan.assignments(),
        vec![
            vec![region_at(0, 1.0, 1.0)],
            vec![region_at(0, 1.0, 1.0), region_at(3, 6.0, 6.0)],
            vec![region_at(0, 1.0, 1.0), region_at(3, 6.0, 6.0)],
        ]
    );
    assert_eq!(plan.best_coverage(), 2);
}

#[rstest]
fn chained_sensors_accumulate_coverage() {
    // Three sensors in a row, each able to reach only its own region.
    // The DP chains one extension per row, so counts climb 1, 2, 3.
    let request = CoverageRequest {
        sensors: vec![
            sensor_at(0, 0.0, 0.0, 1.0),
            sensor_at(1, 10.0, 0.0, 1.0),
            sensor_at(2, 20.0, 0.0, 1.0),
        ],
        regions: vec![
            region_at(0, 0.5, 0.0),
            region_at(1, 10.5, 0.0),
            region_at(2, 20.5, 0.0),
        ],
    };
    let plan = DpOptimizer::new()
        .optimize(&request)
        .expect("optimize should succeed");

    assert_eq!(
        plan.assignments(),
        vec![
            vec![region_at(0, 0.5, 0.0)],
            vec![region_at(0, 0.5, 0.0), region_at(1, 10.5, 0.0)],
            vec![
                region_at(0, 0.5, 0.0),
                region_at(1, 10.5, 0.0),
                region_at(2, 20.5, 0.0),
            ],
        ]
    );
    assert_eq!(plan.best_coverage(), 3);
}
