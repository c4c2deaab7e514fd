//! Dynamic-programming coverage optimizer for Watchgrid.
//!
//! This crate provides [`DpOptimizer`], the default implementation of the
//! [`Optimizer`](watchgrid_core::Optimizer) trait. It fills a
//! [`CoverageTable`] over sensor-prefix and region-boundary indices, then
//! reconstructs the per-sensor assignment lists from parent pointers
//! recorded alongside the coverage counts, so no separate backtracking
//! pass over the input is needed.
//!
//! The optimizer is synchronous, single-threaded, and deterministic: a
//! request is a finite, bounded computation with no I/O, and identical
//! requests always produce identical plans.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod solver;
mod table;

pub use solver::DpOptimizer;
pub use table::{Cell, CoverageTable, Step};
