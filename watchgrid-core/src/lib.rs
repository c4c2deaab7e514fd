//! Core domain types for the Watchgrid coverage engine.
//!
//! The engine assigns monitoring regions to fixed sensors so that the
//! number of covered regions is maximised. This crate holds the shared
//! vocabulary: [`Sensor`] and [`Region`] entities, the
//! [`euclidean_distance`] predicate that decides eligibility, the
//! [`CoverageRequest`] input aggregate, and the [`Optimizer`] trait that
//! solver crates implement. Constructors return `Result` to surface
//! invalid input early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod geometry;
mod optimizer;
mod plan;
mod region;
mod sensor;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use geometry::euclidean_distance;
pub use optimizer::{CoverageRequest, CoverageRequestError, OptimizeError, Optimizer};
pub use plan::CoveragePlan;
pub use region::Region;
pub use sensor::Sensor;
