//! Longest-sum path search over a triangle.
//!
//! The triangle is treated as a DAG whose edge into a node weighs that
//! node's value. Starting from the seeded apex, nodes are settled in order of
//! decreasing best-known sum (ties: larger flattened index first) and each
//! popped node relaxes its two children. Negative values can hold a better
//! branch back behind a weaker one, so a node that was already popped may
//! still improve; it is then queued again and relaxes its children anew.
//! Sums only ever grow and the graph is acyclic, so the queue drains.
//!
//! After the queue drains, the node with the greatest sum (first in
//! flattened order on ties) is the end of the answer, and its `path_parent`
//! chain leads back to the apex.

use crate::error::{Result, TriangleError};
use crate::queue::MaxQueue;
use crate::traits::RelaxObserver;
use crate::triangle::Triangle;

/// The best path found by [`LongestPathSolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Greatest apex-to-node sum.
    pub max_sum: i64,
    /// Flattened indices from the best node up to the apex.
    pub path: Vec<usize>,
}

impl Solution {
    /// Index of the node the path ends on.
    pub fn end(&self) -> usize {
        self.path[0]
    }

    /// Node values along the path, bottom to top.
    pub fn values(&self, triangle: &Triangle) -> Vec<i64> {
        self.path.iter().map(|&i| triangle.node(i).value).collect()
    }
}

/// Max-priority relaxation solver owning the triangle it works on.
///
/// ```
/// use triangle_path::{LongestPathSolver, Triangle};
///
/// let triangle: Triangle = "3\n7 4\n2 4 6\n8 5 9 3".parse().unwrap();
/// let mut solver = LongestPathSolver::new(triangle);
/// let solution = solver.solve().unwrap();
/// assert_eq!(solution.max_sum, 23);
/// assert_eq!(solution.values(solver.triangle()), vec![9, 4, 7, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct LongestPathSolver {
    triangle: Triangle,
}

impl LongestPathSolver {
    pub fn new(triangle: Triangle) -> Self {
        Self { triangle }
    }

    /// The triangle, carrying the sums and path parents of the last solve.
    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    pub fn into_triangle(self) -> Triangle {
        self.triangle
    }

    /// Run the relaxation from a fresh state and return the best path.
    pub fn solve(&mut self) -> Result<Solution> {
        self.solve_observed(())
    }

    /// Same as [`solve`](Self::solve), reporting each step to `observer`.
    pub fn solve_observed<O: RelaxObserver>(&mut self, mut observer: O) -> Result<Solution> {
        if self.triangle.is_empty() {
            return Err(TriangleError::EmptyTriangle);
        }
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "solve",
            rows = self.triangle.depth(),
            nodes = self.triangle.len()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.triangle.reset();
        let nodes = self.triangle.nodes_mut();

        let mut queue = MaxQueue::with_capacity(nodes.len() * 2);
        for node in nodes.iter() {
            queue.push(node.index, node.sum_from_top);
        }

        let mut relaxations = 0usize;
        let mut pops = 0usize;
        while let Some(entry) = queue.pop_with(
            |i| nodes[i].sum_from_top,
            |stale| observer.stale(stale.index, stale.sum),
        ) {
            let current = entry.index;
            pops += 1;
            observer.settled(current, entry.sum);

            let (Some(children), Some(base)) = (nodes[current].children, entry.sum) else {
                continue;
            };
            for child in children {
                let candidate = base
                    .checked_add(nodes[child].value)
                    .ok_or(TriangleError::Overflow { index: child })?;
                let old = nodes[child].sum_from_top;
                if old < Some(candidate) {
                    nodes[child].sum_from_top = Some(candidate);
                    nodes[child].path_parent = Some(current);
                    queue.push(child, Some(candidate));
                    relaxations += 1;
                    observer.relaxed(current, child, old, candidate);
                    #[cfg(feature = "tracing")]
                    tracing::trace!(from = current, to = child, sum = candidate, "relaxed");
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            relaxations,
            pops,
            stale_skipped = queue.stale_skipped(),
            "queue drained"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = (relaxations, pops);

        let solution = self.best_path()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            max_sum = solution.max_sum,
            end = solution.end(),
            length = solution.path.len(),
            "best path found"
        );
        Ok(solution)
    }

    /// Scan for the greatest sum and walk its parents back to the apex.
    fn best_path(&self) -> Result<Solution> {
        let mut best: Option<(usize, i64)> = None;
        for node in self.triangle.nodes() {
            if let Some(sum) = node.sum_from_top {
                if best.map_or(true, |(_, b)| sum > b) {
                    best = Some((node.index, sum));
                }
            }
        }
        let (end, max_sum) = best.ok_or(TriangleError::EmptyTriangle)?;

        let mut path = vec![end];
        let mut cursor = self.triangle.node(end).path_parent;
        while let Some(parent) = cursor {
            path.push(parent);
            cursor = self.triangle.node(parent).path_parent;
        }
        Ok(Solution { max_sum, path })
    }
}
