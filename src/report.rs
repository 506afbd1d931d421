//! Console report for a solved triangle.

use std::io::{self, Write};

use crate::solver::Solution;
use crate::triangle::Triangle;

/// Write the sum line, the path header and one description per path node,
/// bottom to top.
pub fn write_report<W: Write>(
    out: &mut W,
    triangle: &Triangle,
    solution: &Solution,
) -> io::Result<()> {
    writeln!(out, "max sum = {}", solution.max_sum)?;
    writeln!(out, "---Path (bottom to top)---")?;
    for &index in &solution.path {
        match triangle.describe(index) {
            Some(description) => writeln!(out, "{description}")?,
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("path node {index} is not part of the triangle"),
                ))
            }
        }
    }
    Ok(())
}

/// [`write_report`] into a `String`.
///
/// Fails with [`io::ErrorKind::InvalidInput`] when the path names a node the
/// triangle does not have.
pub fn render_report(triangle: &Triangle, solution: &Solution) -> io::Result<String> {
    let mut buf = Vec::new();
    write_report(&mut buf, triangle, solution)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
