//! Facade crate for the Watchgrid coverage engine.
//!
//! This crate re-exports the core domain types and exposes the default
//! dynamic-programming optimizer behind a feature flag.

#![forbid(unsafe_code)]

pub use watchgrid_core::{
    CoveragePlan, CoverageRequest, CoverageRequestError, OptimizeError, Optimizer, Region, Sensor,
    euclidean_distance,
};

#[cfg(feature = "solver-dp")]
pub use watchgrid_solver_dp::DpOptimizer;
