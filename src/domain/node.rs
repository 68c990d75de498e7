//! Item tree model
//!
//! Every list is a tree of [`Node`]s: a name plus an ordered sequence of
//! children. Names are unique among siblings (exact, case-sensitive match)
//! and child order is insertion order, preserved across persistence.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NodeError {
    #[error("An item named '{0}' already exists here")]
    DuplicateName(String),
}

/// A named item that may contain further items
///
/// Nodes own their children by value, so the structure is a strict tree:
/// no sharing, no cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    /// Creates a node with the given name and no children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Returns the node's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the node's name
    ///
    /// No sibling collision check happens here: a node cannot see its own
    /// siblings, so callers that care must check first (list renames do,
    /// item renames historically do not).
    pub fn rename(&mut self, new_name: impl Into<String>) {
        self.name = new_name.into();
    }

    /// Appends a child, rejecting duplicate names
    ///
    /// On a name collision the children are left untouched.
    pub fn add_child(&mut self, child: Node) -> Result<(), NodeError> {
        if self.children.iter().any(|c| c.name == child.name) {
            return Err(NodeError::DuplicateName(child.name));
        }
        self.children.push(child);
        Ok(())
    }

    /// Removes every direct child with the given name
    ///
    /// At most one can match given the sibling uniqueness invariant.
    /// Returns false (and changes nothing) when no child matches.
    pub fn remove_child(&mut self, name: &str) -> bool {
        let before = self.children.len();
        self.children.retain(|c| c.name != name);
        self.children.len() != before
    }

    /// Looks up a direct child by exact name
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Looks up a direct child by exact name, mutably
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// Follows a sequence of child names down from this node
    ///
    /// An empty path yields this node itself.
    pub fn descendant_mut<'a, I>(&mut self, path: I) -> Option<&mut Node>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut node = self;
        for name in path {
            node = node.child_mut(name)?;
        }
        Some(node)
    }

    /// Iterates over direct children in insertion order
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Returns the number of direct children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the node has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Walks the subtree depth-first, pre-order
    ///
    /// Yields `(depth, name)` pairs with this node first at depth 0 and
    /// children in stored order. The walk is lazy and side-effect free;
    /// calling it again restarts from the top.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }
}

/// Depth-first pre-order traversal over a [`Node`] subtree
pub struct Walk<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Push in reverse so the leftmost child pops first
        for child in node.children.iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node.name.as_str()))
    }
}
