//! Plan command: optimize a deployment described by a JSON request file.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use geo::Coord;
use serde::Deserialize;
use watchgrid_core::{CoveragePlan, CoverageRequest, CoverageRequestError, Optimizer};
use watchgrid_solver_dp::DpOptimizer;

use crate::CliError;

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Default)]
#[command(
    long_about = "Optimize a deployment described by a JSON file holding \
                 positionally aligned `sensors`, `regions`, and `capacities` \
                 arrays, then print each sensor's assigned regions.",
    about = "Optimize a deployment from a JSON request file"
)]
pub(crate) struct PlanArgs {
    /// Path to a JSON file describing the deployment.
    #[arg(value_name = "path")]
    pub(crate) request_path: Utf8PathBuf,
    /// Emit the plan as pretty-printed JSON instead of text lines.
    #[arg(long)]
    pub(crate) json: bool,
}

/// JSON wire format: parallel sequences, positions encoded as `[x, y]`.
#[derive(Debug, Deserialize)]
struct PlanRequestFile {
    sensors: Vec<[f64; 2]>,
    regions: Vec<[f64; 2]>,
    capacities: Vec<f64>,
}

impl PlanRequestFile {
    fn into_request(self) -> Result<CoverageRequest, CoverageRequestError> {
        let to_coord = |[x, y]: [f64; 2]| Coord { x, y };
        CoverageRequest::from_parts(
            self.sensors.into_iter().map(to_coord).collect(),
            self.regions.into_iter().map(to_coord).collect(),
            self.capacities,
        )
    }
}

pub(super) fn run_plan(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let PlanArgs { request_path, json } = args;
    let request = load_plan_request(&request_path)?;
    log::debug!(
        "loaded plan request from {request_path}: {} sensors, {} regions",
        request.sensors.len(),
        request.regions.len(),
    );
    let plan = DpOptimizer::new()
        .optimize(&request)
        .map_err(|source| CliError::Optimize { source })?;
    write_plan(writer, &plan, json)
}

fn load_plan_request(path: &Utf8Path) -> Result<CoverageRequest, CliError> {
    let file =
        std::fs::File::open(path.as_std_path()).map_err(|source| CliError::OpenPlanRequest {
            path: path.to_path_buf(),
            source,
        })?;
    let reader = BufReader::new(file);
    let parsed: PlanRequestFile =
        serde_json::from_reader(reader).map_err(|source| CliError::ParsePlanRequest {
            path: path.to_path_buf(),
            source,
        })?;
    parsed
        .into_request()
        .map_err(|source| CliError::InvalidPlanRequest {
            path: path.to_path_buf(),
            source,
        })
}

/// Write `plan` to `writer`, either as pretty JSON or as one
/// `Sensor {i}: [...]` line per sensor, 1-indexed.
pub(crate) fn write_plan(
    writer: &mut dyn Write,
    plan: &CoveragePlan,
    json: bool,
) -> Result<(), CliError> {
    if json {
        let payload = serde_json::to_string_pretty(plan).map_err(CliError::SerializePlan)?;
        writer
            .write_all(payload.as_bytes())
            .map_err(CliError::WriteOutput)?;
        return writer.write_all(b"\n").map_err(CliError::WriteOutput);
    }
    for (index, regions) in plan.assignments().iter().enumerate() {
        let formatted: Vec<String> = regions
            .iter()
            .map(|region| format!("({}, {})", region.location.x, region.location.y))
            .collect();
        writeln!(writer, "Sensor {}: [{}]", index + 1, formatted.join(", "))
            .map_err(CliError::WriteOutput)?;
    }
    Ok(())
}
