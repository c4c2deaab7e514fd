//! Optimizer output: one region list per sensor.

use crate::Region;

/// Result of a coverage optimization.
///
/// Holds an ordered assignment list for every sensor in the request (the
/// list may be empty) together with the best coverage count the optimizer
/// found. Assignment lists are not exclusive: the same region may appear in
/// the lists of several sensors.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoveragePlan {
    assignments: Vec<Vec<Region>>,
    best_coverage: usize,
}

impl CoveragePlan {
    /// Construct a plan from per-sensor assignment lists and the coverage
    /// count achieved.
    #[must_use]
    pub const fn new(assignments: Vec<Vec<Region>>, best_coverage: usize) -> Self {
        Self {
            assignments,
            best_coverage,
        }
    }

    /// Per-sensor assignment lists, ordered as the request's sensors.
    #[must_use]
    pub fn assignments(&self) -> &[Vec<Region>] {
        &self.assignments
    }

    /// Best coverage count achieved across the whole deployment.
    #[must_use]
    pub const fn best_coverage(&self) -> usize {
        self.best_coverage
    }

    /// Consume the plan, yielding the per-sensor assignment lists.
    #[must_use]
    pub fn into_assignments(self) -> Vec<Vec<Region>> {
        self.assignments
    }
}
