//! Demo command: optimize the built-in sample deployment.

use std::io::Write;

use clap::Parser;
use geo::Coord;
use watchgrid_core::{CoverageRequest, Optimizer, Region, Sensor};
use watchgrid_solver_dp::DpOptimizer;

use crate::CliError;
use crate::plan::write_plan;

/// CLI arguments for the `demo` subcommand.
#[derive(Debug, Clone, Copy, Parser, Default)]
#[command(about = "Optimize the built-in sample deployment")]
pub(crate) struct DemoArgs {
    /// Emit the plan as pretty-printed JSON instead of text lines.
    #[arg(long)]
    pub(crate) json: bool,
}

/// Three sensors on a diagonal with six candidate regions between them.
pub(crate) fn demo_deployment() -> CoverageRequest {
    let sensor = |id, x, y, capacity| Sensor::new(id, Coord { x, y }, capacity);
    let region = |id, x, y| Region::new(id, Coord { x, y });
    CoverageRequest {
        sensors: vec![
            sensor(0, 0.0, 0.0, 3.0),
            sensor(1, 5.0, 5.0, 2.0),
            sensor(2, 10.0, 10.0, 2.0),
        ],
        regions: vec![
            region(0, 1.0, 1.0),
            region(1, 2.0, 2.0),
            region(2, 3.0, 3.0),
            region(3, 6.0, 6.0),
            region(4, 7.0, 7.0),
            region(5, 8.0, 8.0),
        ],
    }
}

pub(super) fn run_demo(args: DemoArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let plan = DpOptimizer::new()
        .optimize(&demo_deployment())
        .map_err(|source| CliError::Optimize { source })?;
    write_plan(writer, &plan, args.json)
}
