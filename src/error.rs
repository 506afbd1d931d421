//! Error taxonomy for building and solving triangles.
//!
//! Every failure is fatal to the run: the builder never produces a partial
//! triangle and the solver never returns a partial answer.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TriangleError>;

/// Everything that can go wrong between reading a triangle and reporting its
/// best path. Line numbers are 1-based.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TriangleError {
    /// The input file could not be opened.
    #[error("cannot open triangle file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a line from an already opened source failed.
    #[error("failed to read line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// A line carried no values at all.
    #[error("line {line} is empty")]
    EmptyLine { line: usize },

    /// A token was not an integer.
    #[error("line {line}: `{token}` is not an integer")]
    Parse {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// The input had no rows.
    #[error("input contains no rows")]
    EmptyInput,

    /// Row `line - 1` must hold exactly `line` values.
    #[error("line {line}: expected {expected} values, found {found}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The solver was handed a triangle without nodes.
    #[error("cannot solve an empty triangle")]
    EmptyTriangle,

    /// A path sum left the `i64` range while relaxing into node `index`.
    #[error("path sum overflows i64 at node {index}")]
    Overflow { index: usize },
}

#[cfg(test)]
mod tests {
    use super::TriangleError;

    #[test]
    fn messages_name_the_offending_line() {
        let err = TriangleError::RowLength {
            line: 3,
            expected: 3,
            found: 4,
        };
        assert_eq!(err.to_string(), "line 3: expected 3 values, found 4");

        let source = "x1".parse::<i64>().unwrap_err();
        let err = TriangleError::Parse {
            line: 2,
            token: "x1".into(),
            source,
        };
        assert_eq!(err.to_string(), "line 2: `x1` is not an integer");
        assert!(std::error::Error::source(&err).is_some());
    }
}
