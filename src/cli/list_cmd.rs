//! List-level CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::app::require_name;
use super::output::Output;
use crate::domain::{Catalog, CatalogError};
use crate::storage::Store;

#[derive(Subcommand)]
pub enum ListCommands {
    /// Create a new empty list
    New {
        /// List name
        name: String,
    },

    /// Rename a list
    Rename {
        /// Current list name
        old: String,

        /// New list name
        new: String,
    },

    /// Delete a list and everything in it
    Delete {
        /// List name
        name: String,
    },
}

pub fn run(cmd: ListCommands, output: &Output, catalog: &mut Catalog, store: &Store) -> Result<()> {
    match cmd {
        ListCommands::New { name } => {
            require_name("List", &name)?;
            catalog.create_list(name.as_str())?;
            store.save(catalog);
            output.success(&format!("Created list '{}'", name));
        }

        ListCommands::Rename { old, new } => {
            require_name("List", &new)?;
            let renamed = catalog.rename_list(&old, new.as_str())?;
            store.save(catalog);
            if renamed {
                output.success(&format!("Renamed list '{}' to '{}'", old, new));
            } else {
                output.success(&format!("No list named '{}' to rename", old));
            }
        }

        ListCommands::Delete { name } => {
            let removed = catalog.delete_list(&name);
            store.save(catalog);
            if removed {
                output.success(&format!("Deleted list '{}'", name));
            } else {
                output.success(&format!("No list named '{}' to delete", name));
            }
        }
    }

    Ok(())
}

/// Shows all list names (sorted in text mode purely for readability;
/// catalog enumeration order itself is unspecified)
pub fn show_all(output: &Output, catalog: &Catalog) {
    if output.is_json() {
        let names: Vec<&str> = catalog.list_names().collect();
        output.data(&names);
    } else if catalog.is_empty() {
        println!("No lists available.");
    } else {
        println!("Available lists:");
        let mut names: Vec<&str> = catalog.list_names().collect();
        names.sort_unstable();
        for name in names {
            println!("  {}", name);
        }
    }
}

/// Renders a list's item tree with a fixed indent step per depth level
pub fn show_tree(output: &Output, catalog: &Catalog, name: &str, indent: usize) -> Result<()> {
    let list = catalog
        .get_list(name)
        .ok_or_else(|| CatalogError::NotFound(name.to_string()))?;

    if output.is_json() {
        output.data(list);
    } else {
        for (depth, item) in list.walk() {
            println!("{}{}", " ".repeat(depth * indent), item);
        }
    }

    Ok(())
}
