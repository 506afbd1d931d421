//! Maximum-sum paths through number triangles.
//!
//! A triangle such as
//!
//! ```text
//!    3
//!   7 4
//!  2 4 6
//! 8 5 9 3
//! ```
//!
//! is read into a flat arena of [`Node`]s in which every node above the
//! bottom row points at the two nodes below it. The [`LongestPathSolver`]
//! treats that arena as a DAG and runs a Dijkstra-style relaxation driven by a
//! max-priority queue, so each node ends up with the greatest sum reachable
//! from the apex together with the predecessor that achieves it.
//!
//! ## Quick start
//! ```
//! use triangle_path::{LongestPathSolver, Triangle};
//!
//! let triangle: Triangle = "3\n7 4\n2 4 6\n8 5 9 3".parse().unwrap();
//! let mut solver = LongestPathSolver::new(triangle);
//! let solution = solver.solve().unwrap();
//! assert_eq!(solution.max_sum, 23);
//! assert_eq!(solution.path, vec![8, 4, 1, 0]);
//! ```
//!
//! ## Features
//! - `tracing` (default): spans and events from the builder and solver, plus
//!   the [`logging`] module used by the `max-path-sum` binary.

pub mod builder;
pub mod error;
#[cfg(feature = "tracing")]
pub mod logging;
pub mod node;
pub mod queue;
pub mod report;
pub mod solver;
pub mod traits;
pub mod triangle;
pub mod utils;

pub use crate::builder::TriangleBuilder;
pub use crate::error::{Result, TriangleError};
pub use crate::node::Node;
pub use crate::solver::{LongestPathSolver, Solution};
pub use crate::traits::RelaxObserver;
pub use crate::triangle::Triangle;
