//! Item-level CLI commands
//!
//! Items default to direct children of the list root; `--under` takes a
//! slash-separated path of item names to address deeper levels, e.g.
//! `gear item add Camping Stakes --under Tent`.

use anyhow::{anyhow, Result};
use clap::Subcommand;

use super::app::require_name;
use super::output::Output;
use crate::domain::{Catalog, CatalogError, Node};
use crate::storage::Store;

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add an item to a list
    Add {
        /// List name
        list: String,

        /// Item name
        name: String,

        /// Slash-separated path of parent items below the root
        #[arg(long)]
        under: Option<String>,
    },

    /// Remove an item (and everything under it) from a list
    Remove {
        /// List name
        list: String,

        /// Item name
        name: String,

        /// Slash-separated path of parent items below the root
        #[arg(long)]
        under: Option<String>,
    },

    /// Rename an item
    Rename {
        /// List name
        list: String,

        /// Current item name
        old: String,

        /// New item name
        new: String,

        /// Slash-separated path of parent items below the root
        #[arg(long)]
        under: Option<String>,
    },
}

pub fn run(cmd: ItemCommands, output: &Output, catalog: &mut Catalog, store: &Store) -> Result<()> {
    match cmd {
        ItemCommands::Add { list, name, under } => {
            require_name("Item", &name)?;
            let parent = resolve_parent(catalog, &list, under.as_deref())?;
            parent.add_child(Node::new(name.as_str()))?;
            store.save(catalog);
            output.success(&format!("Added '{}' to '{}'", name, list));
        }

        ItemCommands::Remove { list, name, under } => {
            let parent = resolve_parent(catalog, &list, under.as_deref())?;
            let removed = parent.remove_child(&name);
            store.save(catalog);
            if removed {
                output.success(&format!("Removed '{}' from '{}'", name, list));
            } else {
                output.success(&format!("No item named '{}' to remove", name));
            }
        }

        ItemCommands::Rename {
            list,
            old,
            new,
            under,
        } => {
            require_name("Item", &new)?;
            let parent = resolve_parent(catalog, &list, under.as_deref())?;
            // Renames never check siblings, so two items can end up sharing
            // a name; list renames are the strict ones
            let renamed = match parent.child_mut(&old) {
                Some(item) => {
                    item.rename(new.as_str());
                    true
                }
                None => false,
            };
            store.save(catalog);
            if renamed {
                output.success(&format!("Renamed '{}' to '{}'", old, new));
            } else {
                output.success(&format!("No item named '{}' to rename", old));
            }
        }
    }

    Ok(())
}

/// Resolves the node items are edited under: the list root, or the node at
/// the `--under` path below it
fn resolve_parent<'a>(
    catalog: &'a mut Catalog,
    list: &str,
    under: Option<&str>,
) -> Result<&'a mut Node> {
    let root = catalog
        .get_list_mut(list)
        .ok_or_else(|| CatalogError::NotFound(list.to_string()))?;

    match under {
        None => Ok(root),
        Some(path) => {
            let segments = path.split('/').filter(|s| !s.is_empty());
            root.descendant_mut(segments)
                .ok_or_else(|| anyhow!("No item at '{}' in list '{}'", path, list))
        }
    }
}
