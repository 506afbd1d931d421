//! Hooks into the relaxation loop.
//!
//! The solver reports every step to a [`RelaxObserver`]. The unit type `()`
//! ignores everything and is what [`LongestPathSolver::solve`] uses; tests
//! and diagnostics can plug in their own recorder through
//! [`LongestPathSolver::solve_observed`].
//!
//! [`LongestPathSolver::solve`]: crate::solver::LongestPathSolver::solve
//! [`LongestPathSolver::solve_observed`]: crate::solver::LongestPathSolver::solve_observed

/// Receives relaxation events in the order they happen.
pub trait RelaxObserver {
    /// Node `index` left the queue carrying its current `sum`. A node pops
    /// again if a later relaxation improves it.
    fn settled(&mut self, index: usize, sum: Option<i64>) {
        let _ = (index, sum);
    }

    /// The best sum into `to` improved from `old` to `new` via `from`.
    fn relaxed(&mut self, from: usize, to: usize, old: Option<i64>, new: i64) {
        let _ = (from, to, old, new);
    }

    /// A queue entry for `index` stamped with the outdated `sum` was dropped.
    fn stale(&mut self, index: usize, sum: Option<i64>) {
        let _ = (index, sum);
    }
}

impl RelaxObserver for () {}

impl<O: RelaxObserver + ?Sized> RelaxObserver for &mut O {
    fn settled(&mut self, index: usize, sum: Option<i64>) {
        (**self).settled(index, sum);
    }

    fn relaxed(&mut self, from: usize, to: usize, old: Option<i64>, new: i64) {
        (**self).relaxed(from, to, old, new);
    }

    fn stale(&mut self, index: usize, sum: Option<i64>) {
        (**self).stale(index, sum);
    }
}
