//! Index arithmetic for flattened triangles, plus a plain bottom-up DP used
//! as a reference when cross-checking the solver.

/// Number of nodes in a triangle with `rows` rows.
#[inline]
pub fn triangle_len(rows: usize) -> usize {
    rows * (rows + 1) / 2
}

/// Flattened index of the first node on row `level`.
#[inline]
pub fn row_start(level: usize) -> usize {
    triangle_len(level)
}

/// Flattened indices of the two nodes directly below `index` on row `level`.
///
/// The node at position `p` of row `level` sits at `row_start(level) + p`; its
/// children sit at positions `p` and `p + 1` of the next row, which is
/// `level + 1` slots further along.
#[inline]
pub fn child_indices(index: usize, level: usize) -> (usize, usize) {
    (index + level + 1, index + level + 2)
}

/// Best apex-to-any-node sum computed row by row.
///
/// Returns `None` for an empty input. Rows are assumed to be well formed.
pub fn reference_max_sum(rows: &[Vec<i64>]) -> Option<i64> {
    let mut prev: Vec<i64> = Vec::new();
    let mut best: Option<i64> = None;
    for (level, row) in rows.iter().enumerate() {
        let mut cur = Vec::with_capacity(row.len());
        for (pos, &value) in row.iter().enumerate() {
            let above = if level == 0 {
                0
            } else {
                let left = pos.checked_sub(1).and_then(|p| prev.get(p)).copied();
                let right = prev.get(pos).copied();
                match (left, right) {
                    (Some(l), Some(r)) => l.max(r),
                    (Some(l), None) => l,
                    (None, Some(r)) => r,
                    (None, None) => 0,
                }
            };
            cur.push(above + value);
        }
        let row_best = cur.iter().copied().max();
        best = best.max(row_best);
        prev = cur;
    }
    best
}
