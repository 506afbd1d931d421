use std::path::PathBuf;

use triangle_path::{utils::row_start, LongestPathSolver, Triangle};

fn solve(text: &str) -> (triangle_path::Solution, Triangle) {
    let mut solver = LongestPathSolver::new(text.parse().unwrap());
    let solution = solver.solve().unwrap();
    (solution, solver.into_triangle())
}

fn uniform(depth: usize, value: i64) -> String {
    (0..depth)
        .map(|r| vec![value.to_string(); r + 1].join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn single_row_is_its_own_answer() {
    let (solution, triangle) = solve("5");
    assert_eq!(solution.max_sum, 5);
    assert_eq!(solution.path, vec![0]);
    assert_eq!(triangle.node(0).path_parent, None);
}

#[test]
fn classic_four_row_triangle() {
    let (solution, triangle) = solve("3\n7 4\n2 4 6\n8 5 9 3");
    assert_eq!(solution.max_sum, 23);
    assert_eq!(solution.values(&triangle), vec![9, 4, 7, 3]);
}

#[test]
fn bundled_fifteen_row_triangle() {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "data", "triangle.txt"]
        .iter()
        .collect();
    let mut solver = LongestPathSolver::new(Triangle::from_path(path).unwrap());
    let solution = solver.solve().unwrap();
    assert_eq!(solution.max_sum, 1074);
    assert_eq!(solution.path.len(), 15);
    assert_eq!(solution.path.last(), Some(&0));
    let total: i64 = solution.values(solver.triangle()).iter().sum();
    assert_eq!(total, 1074);
}

#[test]
fn negative_values_pick_the_global_maximum() {
    let (solution, triangle) = solve("-1\n-2 -3\n10 -100 -100");
    assert_eq!(solution.max_sum, 7);
    assert_eq!(solution.values(&triangle), vec![10, -2, -1]);

    // Going down only loses value here, so the apex alone is best.
    let (solution, _) = solve("-5\n-1 -9\n-3 -3 -3");
    assert_eq!(solution.max_sum, -5);
    assert_eq!(solution.path, vec![0]);
}

#[test]
fn branch_held_back_by_a_negative_node_still_wins() {
    let (solution, triangle) = solve("0\n5 -100\n0 100 1000\n0 0 0 0");
    assert_eq!(solution.max_sum, 900);
    assert_eq!(solution.values(&triangle), vec![1000, -100, 0]);
    // Both bottom nodes below the 1000 end up routed through it.
    assert_eq!(triangle.node(8).sum_from_top, Some(900));
    assert_eq!(triangle.node(8).path_parent, Some(5));
    assert_eq!(triangle.node(9).path_parent, Some(5));
}

#[test]
fn uniform_triangle_follows_the_larger_index_parent() {
    let depth = 6;
    let (solution, triangle) = solve(&uniform(depth, 1));
    for level in 1..depth {
        for pos in 0..=level {
            let index = row_start(level) + pos;
            let expected = row_start(level - 1) + pos.min(level - 1);
            assert_eq!(
                triangle.node(index).path_parent,
                Some(expected),
                "level {level} pos {pos}"
            );
        }
    }
    // Leftmost bottom node is the first maximum in flattened order.
    assert_eq!(solution.max_sum, depth as i64);
    assert_eq!(solution.end(), row_start(depth - 1));
}

#[test]
fn all_zero_triangle_reports_the_apex() {
    let (solution, _) = solve(&uniform(4, 0));
    assert_eq!(solution.max_sum, 0);
    assert_eq!(solution.path, vec![0]);
}

#[test]
fn tie_resolution_is_stable_across_runs() {
    let text = "2\n1 1\n3 2 3\n1 1 1 1";
    let (first, first_triangle) = solve(text);
    for _ in 0..10 {
        let (again, again_triangle) = solve(text);
        assert_eq!(again, first);
        assert_eq!(again_triangle, first_triangle);
    }
}

#[test]
fn solving_twice_on_one_triangle_is_idempotent() {
    let mut solver = LongestPathSolver::new("3\n7 4\n2 4 6\n8 5 9 3".parse().unwrap());
    let first = solver.solve().unwrap();
    let snapshot = solver.triangle().clone();
    let second = solver.solve().unwrap();
    assert_eq!(first, second);
    assert_eq!(&snapshot, solver.triangle());
}
