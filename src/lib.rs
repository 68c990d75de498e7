//! Gear - a personal inventory organizer
//!
//! Inventories are named lists, each holding a tree of named items: the
//! "Camping" list contains a tent, the tent contains its poles and stakes.
//! Lists live in a [`Catalog`](domain::Catalog) that is persisted as a single
//! JSON snapshot by the [`Store`](storage::Store); the CLI edits the catalog
//! and rewrites the snapshot after every change.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Catalog, CatalogError, Node, NodeError};
pub use storage::{Config, LoadOutcome, LoadStatus, Store};
