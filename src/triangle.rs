//! The node arena produced by [`TriangleBuilder`] and consumed by the solver.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::builder::TriangleBuilder;
use crate::error::{Result, TriangleError};
use crate::node::{Node, NodeDescription};

/// A number triangle stored as a flat, index-addressed collection of nodes.
///
/// Node `i` lives at `nodes[i]`; children and path parents are indices into
/// the same vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle {
    pub(crate) nodes: Vec<Node>,
    pub(crate) depth: usize,
}

impl Triangle {
    /// Build from in-memory rows.
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<i64>>,
    {
        let mut builder = TriangleBuilder::new();
        for row in rows {
            builder.push_row(row)?;
        }
        builder.build()
    }

    /// Build from any line-oriented reader, one row per line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut builder = TriangleBuilder::new();
        for (n, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| TriangleError::Read {
                line: n + 1,
                source,
            })?;
            builder.parse_line(&line)?;
        }
        builder.build()
    }

    /// Open and parse a triangle file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TriangleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), "reading triangle");
        Self::from_reader(BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of rows.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Display form of node `index`, or `None` if it does not exist.
    pub fn describe(&self, index: usize) -> Option<NodeDescription<'_>> {
        let node = self.nodes.get(index)?;
        let children = match node.children {
            Some([a, b]) => Some((self.nodes.get(a)?, self.nodes.get(b)?)),
            None => None,
        };
        Some(NodeDescription { node, children })
    }

    /// Values grouped back into rows.
    pub fn rows(&self) -> Vec<Vec<i64>> {
        let mut rows: Vec<Vec<i64>> = (0..self.depth)
            .map(|r| Vec::with_capacity(r + 1))
            .collect();
        for node in &self.nodes {
            rows[node.level].push(node.value);
        }
        rows
    }

    /// Restore the freshly built state: apex seeded with its own value, every
    /// other sum at negative infinity, no path parents.
    pub fn reset(&mut self) {
        for node in &mut self.nodes {
            node.reset();
        }
    }
}

impl FromStr for Triangle {
    type Err = TriangleError;

    fn from_str(s: &str) -> Result<Self> {
        let mut builder = TriangleBuilder::new();
        for line in s.lines() {
            builder.parse_line(line)?;
        }
        builder.build()
    }
}
