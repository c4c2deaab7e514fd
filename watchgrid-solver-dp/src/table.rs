//! DP state arena for the coverage optimizer.
//!
//! The table has one row per sensor prefix (row 0 means "no sensors") and
//! one column per region boundary (column 0 is the "no region yet"
//! sentinel). Each cell stores the best coverage count for that prefix and
//! boundary plus a [`Step`] recording how the count was reached, so the
//! concrete assignment list can be reconstructed by walking steps upward
//! through the rows instead of copying lists into every cell.

use watchgrid_core::CoverageRequest;

/// How a cell's count was obtained from the row above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Carry the cell one row up at the same boundary, unchanged.
    Inherit,
    /// Extend the row-above cell at `boundary` with the region at that
    /// index.
    Extend {
        /// Region index the extension anchors on.
        boundary: usize,
    },
}

/// One entry of the coverage table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Best coverage count achievable at this prefix and boundary.
    pub count: usize,
    /// Provenance of the count.
    pub step: Step,
}

impl Cell {
    const EMPTY: Self = Self {
        count: 0,
        step: Step::Inherit,
    };
}

/// `(sensors + 1) x (regions + 1)` arena of [`Cell`] values.
///
/// Built once per optimization run with exclusive write access, then read
/// only. Row `i` depends only on row `i - 1`, and within a row each column
/// `j` looks only at columns below `j` in the previous row.
#[derive(Debug, Clone)]
pub struct CoverageTable {
    sensors: usize,
    regions: usize,
    cells: Vec<Cell>,
}

impl CoverageTable {
    /// Allocate a table for `sensors` rows and `regions` columns, all
    /// counts zero. This is the DP base case: zero sensors or the sentinel
    /// boundary always yield zero coverage.
    #[must_use]
    pub fn new(sensors: usize, regions: usize) -> Self {
        Self {
            sensors,
            regions,
            cells: vec![Cell::EMPTY; (sensors + 1) * (regions + 1)],
        }
    }

    /// Number of sensor rows (excluding the base row).
    #[must_use]
    pub const fn sensors(&self) -> usize {
        self.sensors
    }

    /// Number of region columns (excluding the sentinel column).
    #[must_use]
    pub const fn regions(&self) -> usize {
        self.regions
    }

    const fn index(&self, sensor: usize, boundary: usize) -> usize {
        sensor * (self.regions + 1) + boundary
    }

    /// Cell at sensor prefix `sensor` and region boundary `boundary`.
    ///
    /// # Panics
    /// Panics when either index is out of range; callers stay within the
    /// dimensions passed to [`CoverageTable::new`].
    #[must_use]
    pub fn cell(&self, sensor: usize, boundary: usize) -> Cell {
        assert!(sensor <= self.sensors && boundary <= self.regions);
        self.cells[self.index(sensor, boundary)]
    }

    /// Coverage count at `(sensor, boundary)`.
    #[must_use]
    pub fn count(&self, sensor: usize, boundary: usize) -> usize {
        self.cell(sensor, boundary).count
    }

    pub(crate) fn set(&mut self, sensor: usize, boundary: usize, cell: Cell) {
        let index = self.index(sensor, boundary);
        self.cells[index] = cell;
    }

    /// Reconstruct the ordered region indices assigned at
    /// `(sensor, boundary)` by walking provenance steps up to the base row.
    ///
    /// The walk visits strictly decreasing boundaries, so an index can
    /// appear at most once in the result.
    #[must_use]
    pub fn assigned_regions(&self, sensor: usize, boundary: usize) -> Vec<usize> {
        let mut chosen = Vec::new();
        let mut row = sensor;
        let mut col = boundary;
        while row > 0 {
            match self.cell(row, col).step {
                Step::Inherit => {}
                Step::Extend { boundary: anchor } => {
                    chosen.push(anchor);
                    col = anchor;
                }
            }
            row -= 1;
        }
        chosen.reverse();
        chosen
    }

    /// Fill the table for `request` in row-major order.
    ///
    /// For each sensor row the default is to inherit the cell above; any
    /// boundary `k` strictly below `j` whose region is within the sensor's
    /// reach may instead extend the row-above cell at `k`. Strict
    /// improvement is required, so the first qualifying `k` wins ties.
    #[must_use]
    pub fn build(request: &CoverageRequest) -> Self {
        let mut table = Self::new(request.sensors.len(), request.regions.len());
        for (i, sensor) in request.sensors.iter().enumerate() {
            let row = i + 1;
            // Reach is a property of the sensor alone; hoist it out of the
            // boundary loop.
            let in_reach: Vec<bool> = request
                .regions
                .iter()
                .map(|region| sensor.covers(region.location))
                .collect();
            for j in 1..=table.regions {
                let mut cell = Cell {
                    count: table.count(row - 1, j),
                    step: Step::Inherit,
                };
                for (k, reachable) in in_reach.iter().enumerate().take(j) {
                    if *reachable && table.count(row - 1, k) + 1 > cell.count {
                        cell = Cell {
                            count: table.count(row - 1, k) + 1,
                            step: Step::Extend { boundary: k },
                        };
                    }
                }
                table.set(row, j, cell);
            }
        }
        table
    }
}
