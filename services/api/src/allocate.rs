use clap::Args;
use kitty_allocator::config::AllocationConfig;
use kitty_allocator::error::AppError;
use kitty_allocator::workflows::allocation::{
    AllocationEngine, AllocationReport, AllocationRequest, WeightsConfig,
};
use kitty_allocator::workflows::roster::RosterImporter;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct AllocateArgs {
    /// Allocation input document (siteKitty, salesAgents, optional bounds)
    #[arg(default_value = "input.json")]
    pub(crate) input: PathBuf,
    /// Write the report here instead of printing it
    pub(crate) output: Option<PathBuf>,
    /// Weights config document (defaults to APP_WEIGHTS_PATH or config.json)
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct RosterArgs {
    /// CSV roster with one row of metrics per sales agent
    pub(crate) roster_csv: PathBuf,
    /// Total kitty to distribute
    #[arg(long)]
    pub(crate) kitty: i64,
    /// Per-agent floor (defaults to kitty / (agents * 10))
    #[arg(long)]
    pub(crate) min_per_agent: Option<i64>,
    /// Per-agent ceiling (defaults to kitty / 2)
    #[arg(long)]
    pub(crate) max_per_agent: Option<i64>,
    /// Write the report here instead of printing it
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Weights config document (defaults to APP_WEIGHTS_PATH or config.json)
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
}

pub(crate) fn run_allocate(args: AllocateArgs, defaults: &AllocationConfig) -> Result<(), AppError> {
    let AllocateArgs {
        input,
        output,
        config,
    } = args;

    let request = AllocationRequest::from_path(&input)?;
    let weights_path = config.unwrap_or_else(|| defaults.weights_path.clone());
    let report = build_report(&request, &weights_path)?;

    emit_report(&report, output.as_deref())
}

pub(crate) fn run_roster(args: RosterArgs, defaults: &AllocationConfig) -> Result<(), AppError> {
    let RosterArgs {
        roster_csv,
        kitty,
        min_per_agent,
        max_per_agent,
        output,
        config,
    } = args;

    let request = AllocationRequest {
        site_kitty: kitty,
        sales_agents: RosterImporter::from_path(&roster_csv)?,
        min_per_agent,
        max_per_agent,
    };
    let weights_path = config.unwrap_or_else(|| defaults.weights_path.clone());
    let report = build_report(&request, &weights_path)?;

    emit_report(&report, output.as_deref())
}

fn build_report(
    request: &AllocationRequest,
    weights_path: &Path,
) -> Result<AllocationReport, AppError> {
    let weights = WeightsConfig::from_path(weights_path)?.weights;
    let report = AllocationEngine::new(weights).run(request)?;
    Ok(report)
}

fn emit_report(report: &AllocationReport, output: Option<&Path>) -> Result<(), AppError> {
    let rendered = report.to_pretty_json().map_err(std::io::Error::from)?;

    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!(path = %path.display(), agents = report.allocations.len(), "allocation saved");
            println!("Allocation saved to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
