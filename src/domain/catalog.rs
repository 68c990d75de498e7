//! Catalog of lists
//!
//! The catalog maps list names to root [`Node`]s. A root's own name always
//! equals its key, so a persisted catalog can be stored as a plain array of
//! roots and the mapping rebuilt on load.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::node::Node;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("A list named '{0}' already exists")]
    DuplicateName(String),

    #[error("No list named '{0}'")]
    NotFound(String),
}

/// The full set of lists, keyed by list name
///
/// Serialized as an array of root nodes sorted by name; the map is rebuilt
/// from root names on deserialization, so the key/name invariant holds by
/// construction and duplicate roots are rejected as corrupt input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Node>", into = "Vec<Node>")]
pub struct Catalog {
    lists: HashMap<String, Node>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty list
    ///
    /// Fails with [`CatalogError::DuplicateName`] when the name is taken,
    /// leaving the catalog unchanged.
    pub fn create_list(&mut self, name: impl Into<String>) -> Result<(), CatalogError> {
        let name = name.into();
        if self.lists.contains_key(&name) {
            return Err(CatalogError::DuplicateName(name));
        }
        self.lists.insert(name.clone(), Node::new(name));
        Ok(())
    }

    /// Moves a list to a new name, renaming its root to match
    ///
    /// The target name is checked first: renaming onto an existing list
    /// fails even when the source is absent. A missing source is a lenient
    /// no-op reported as `Ok(false)`, never an error.
    pub fn rename_list(&mut self, old: &str, new: impl Into<String>) -> Result<bool, CatalogError> {
        let new = new.into();
        if self.lists.contains_key(&new) {
            return Err(CatalogError::DuplicateName(new));
        }
        match self.lists.remove(old) {
            Some(mut root) => {
                root.rename(new.clone());
                self.lists.insert(new, root);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes a list and its whole tree
    ///
    /// Returns false when no such list exists.
    pub fn delete_list(&mut self, name: &str) -> bool {
        self.lists.remove(name).is_some()
    }

    /// Returns the root node for a list, never creating one
    pub fn get_list(&self, name: &str) -> Option<&Node> {
        self.lists.get(name)
    }

    /// Returns the root node for a list, mutably
    pub fn get_list_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.lists.get_mut(name)
    }

    /// Iterates over list names in unspecified order
    pub fn list_names(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    /// Returns the number of lists
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns true if there are no lists
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

impl TryFrom<Vec<Node>> for Catalog {
    type Error = CatalogError;

    fn try_from(roots: Vec<Node>) -> Result<Self, Self::Error> {
        let mut lists = HashMap::with_capacity(roots.len());
        for root in roots {
            let name = root.name().to_string();
            if lists.insert(name.clone(), root).is_some() {
                return Err(CatalogError::DuplicateName(name));
            }
        }
        Ok(Self { lists })
    }
}

impl From<Catalog> for Vec<Node> {
    fn from(catalog: Catalog) -> Self {
        let mut roots: Vec<Node> = catalog.lists.into_values().collect();
        // Sorted output keeps snapshots stable across runs
        roots.sort_by(|a, b| a.name().cmp(b.name()));
        roots
    }
}
