//! Example: solve the bundled 15-row triangle and print the report.
//!
//! Run with:
//! `cargo run --example classic`

use std::path::PathBuf;

use triangle_path::{report::render_report, LongestPathSolver, Triangle};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "data", "triangle.txt"]
        .iter()
        .collect();
    let triangle = Triangle::from_path(&path)?;
    println!("Rows: {}, nodes: {}", triangle.depth(), triangle.len());

    let mut solver = LongestPathSolver::new(triangle);
    let solution = solver.solve()?;
    print!("{}", render_report(solver.triangle(), &solution)?);

    let values = solution.values(solver.triangle());
    println!("Top-down values: {:?}", values.iter().rev().collect::<Vec<_>>());
    Ok(())
}
