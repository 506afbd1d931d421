use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use triangle_path::{report::write_report, LongestPathSolver, Triangle};

#[derive(Parser)]
#[command(name = "max-path-sum")]
#[command(about = "Find the maximum-sum path from the apex of a number triangle")]
struct Cli {
    /// Triangle file: one row per line, whitespace-separated integers
    path: PathBuf,

    /// Emit diagnostics on stderr as JSON
    #[arg(long)]
    json_logs: bool,
}

#[cfg(feature = "tracing")]
fn init_logging(json: bool) {
    if json {
        triangle_path::logging::init_tracing_json();
    } else {
        triangle_path::logging::init_tracing();
    }
}

#[cfg(not(feature = "tracing"))]
fn init_logging(_json: bool) {}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.json_logs);

    let triangle = Triangle::from_path(&cli.path)
        .with_context(|| format!("failed to load triangle from {}", cli.path.display()))?;
    let mut solver = LongestPathSolver::new(triangle);
    let solution = solver.solve().context("failed to solve triangle")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, solver.triangle(), &solution).context("failed to write report")?;
    out.flush().context("failed to write report")?;
    Ok(())
}
