//! Arena records for triangle entries.
//!
//! Nodes refer to each other by flattened index into the owning
//! [`Triangle`](crate::triangle::Triangle), never by reference.

use std::fmt;

/// One entry of the triangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The number at this position.
    pub value: i64,
    /// Row index; the apex is on level 0.
    pub level: usize,
    /// Position in the top-to-bottom, left-to-right enumeration.
    pub index: usize,
    /// Left and right child on the next row; `None` on the bottom row.
    pub children: Option<[usize; 2]>,
    /// Best known apex-to-here sum. `None` stands for negative infinity.
    pub sum_from_top: Option<i64>,
    /// Predecessor on the best known path.
    pub path_parent: Option<usize>,
}

impl Node {
    pub fn new(value: i64, level: usize, index: usize) -> Self {
        Self {
            value,
            level,
            index,
            children: None,
            sum_from_top: None,
            path_parent: None,
        }
    }

    #[inline]
    pub fn is_apex(&self) -> bool {
        self.index == 0
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Put the node back into its pre-solve state.
    pub(crate) fn reset(&mut self) {
        self.sum_from_top = if self.is_apex() { Some(self.value) } else { None };
        self.path_parent = None;
    }
}

/// Borrowed view of a node together with its children, formatted the way the
/// console report prints each path entry.
#[derive(Debug, Clone, Copy)]
pub struct NodeDescription<'a> {
    pub node: &'a Node,
    pub children: Option<(&'a Node, &'a Node)>,
}

impl fmt::Display for NodeDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value: {} Level: {}", self.node.value, self.node.level)?;
        match self.children {
            Some((first, second)) => write!(
                f,
                " First child: {} Second child: {}",
                first.value, second.value
            )?,
            None => f.write_str(" No children")?,
        }
        f.write_str(" Sum from top: ")?;
        match self.node.sum_from_top {
            Some(sum) => write!(f, "{sum}"),
            None => f.write_str("-inf"),
        }
    }
}
