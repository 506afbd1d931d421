use crate::error::{Result, TriangleError};
use crate::node::Node;
use crate::triangle::Triangle;
use crate::utils::child_indices;

/// Accumulates triangle rows and wires them into a [`Triangle`].
///
/// Rows are validated as they arrive: row `r` (0-based) must hold exactly
/// `r + 1` values, so a finished builder always describes a full triangle.
#[derive(Debug, Default, Clone)]
pub struct TriangleBuilder {
    rows: Vec<Vec<i64>>,
}

impl TriangleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows accepted so far.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Append one row of already parsed values.
    pub fn push_row(&mut self, row: Vec<i64>) -> Result<()> {
        let line = self.rows.len() + 1;
        if row.is_empty() {
            return Err(TriangleError::EmptyLine { line });
        }
        if row.len() != line {
            return Err(TriangleError::RowLength {
                line,
                expected: line,
                found: row.len(),
            });
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(level = line - 1, width = row.len(), "row accepted");
        self.rows.push(row);
        Ok(())
    }

    /// Tokenize one text line by whitespace and append it as a row.
    pub fn parse_line(&mut self, text: &str) -> Result<()> {
        let line = self.rows.len() + 1;
        let row = text
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().map_err(|source| TriangleError::Parse {
                    line,
                    token: token.to_owned(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        self.push_row(row)
    }

    /// Flatten the rows into an arena, connect every non-bottom node to its
    /// two children and seed the apex.
    pub fn build(self) -> Result<Triangle> {
        if self.rows.is_empty() {
            return Err(TriangleError::EmptyInput);
        }
        let depth = self.rows.len();

        let mut nodes: Vec<Node> = Vec::with_capacity(crate::utils::triangle_len(depth));
        for (level, row) in self.rows.into_iter().enumerate() {
            for value in row {
                let index = nodes.len();
                nodes.push(Node::new(value, level, index));
            }
        }

        let len = nodes.len();
        for node in nodes.iter_mut() {
            let (first, second) = child_indices(node.index, node.level);
            // Rows are complete, so the second child exists whenever the first does.
            if first < len {
                debug_assert!(second < len);
                node.children = Some([first, second]);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(rows = depth, nodes = len, "triangle built");

        let mut triangle = Triangle { nodes, depth };
        triangle.reset();
        Ok(triangle)
    }
}

#[cfg(test)]
mod tests {
    use super::TriangleBuilder;
    use crate::error::TriangleError;

    #[test]
    fn wires_children_by_flattened_index() {
        let mut b = TriangleBuilder::new();
        for line in ["3", "7 4", "2 4 6"] {
            b.parse_line(line).unwrap();
        }
        let t = b.build().unwrap();
        assert_eq!(t.len(), 6);
        assert_eq!(t.depth(), 3);
        assert_eq!(t.node(0).children, Some([1, 2]));
        assert_eq!(t.node(1).children, Some([3, 4]));
        assert_eq!(t.node(2).children, Some([4, 5]));
        assert!(t.nodes()[3..].iter().all(|n| n.is_leaf()));
        assert_eq!(t.node(0).sum_from_top, Some(3));
        assert!(t.nodes()[1..].iter().all(|n| n.sum_from_top.is_none()));
    }

    #[test]
    fn rejects_rows_of_the_wrong_width() {
        let mut b = TriangleBuilder::new();
        b.parse_line("1").unwrap();
        let err = b.parse_line("1 2 3").unwrap_err();
        assert!(matches!(
            err,
            TriangleError::RowLength {
                line: 2,
                expected: 2,
                found: 3
            }
        ));
        // The rejected row is not kept.
        assert_eq!(b.rows(), 1);
    }

    #[test]
    fn rejects_blank_lines_and_bad_tokens() {
        let mut b = TriangleBuilder::new();
        assert!(matches!(
            b.parse_line("   ").unwrap_err(),
            TriangleError::EmptyLine { line: 1 }
        ));
        b.parse_line("4").unwrap();
        match b.parse_line("1 two").unwrap_err() {
            TriangleError::Parse { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "two");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_builder_cannot_build() {
        assert!(matches!(
            TriangleBuilder::new().build().unwrap_err(),
            TriangleError::EmptyInput
        ));
    }
}
