//! Interactive menu shell
//!
//! A line-oriented menu loop over the same catalog operations the direct
//! commands use. The catalog and store arrive as explicit parameters and
//! the reader/writer are injected, so the loop carries no global state and
//! tests can drive it with plain buffers. Every mutation is followed by a
//! save, exactly like the one-shot commands.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::domain::{Catalog, Node};
use crate::storage::Store;

/// Runs the main menu until the user exits or input ends
pub fn run<R, W>(catalog: &mut Catalog, store: &Store, input: &mut R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out)?;
        writeln!(out, "Main menu")?;
        writeln!(out, "1. Display lists")?;
        writeln!(out, "2. Create a list")?;
        writeln!(out, "3. Rename a list")?;
        writeln!(out, "4. Delete a list")?;
        writeln!(out, "5. Select a list")?;
        writeln!(out, "6. Exit")?;

        let Some(choice) = prompt(input, out, "Choose an option: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => display_lists(catalog, out)?,

            "2" => {
                let Some(name) = prompt(input, out, "Enter list name: ")? else {
                    return Ok(());
                };
                if name.trim().is_empty() {
                    writeln!(out, "List name must not be empty.")?;
                    continue;
                }
                match catalog.create_list(name.as_str()) {
                    Ok(()) => {
                        store.save(catalog);
                        writeln!(out, "Created list '{}'.", name)?;
                    }
                    Err(err) => writeln!(out, "{}. Please choose another name.", err)?,
                }
            }

            "3" => {
                let Some(old) = prompt(input, out, "Enter old list name: ")? else {
                    return Ok(());
                };
                let Some(new) = prompt(input, out, "Enter new list name: ")? else {
                    return Ok(());
                };
                if new.trim().is_empty() {
                    writeln!(out, "List name must not be empty.")?;
                    continue;
                }
                match catalog.rename_list(&old, new.as_str()) {
                    Ok(_) => store.save(catalog),
                    Err(err) => {
                        writeln!(out, "{}. Please choose another name.", err)?;
                        continue;
                    }
                };
            }

            "4" => {
                let Some(name) = prompt(input, out, "Enter list name to delete: ")? else {
                    return Ok(());
                };
                catalog.delete_list(&name);
                store.save(catalog);
            }

            "5" => {
                let Some(name) = prompt(input, out, "Enter list name to select: ")? else {
                    return Ok(());
                };
                if catalog.get_list(&name).is_some() {
                    manage_items(catalog, store, &name, input, out)?;
                } else {
                    writeln!(out, "List not found.")?;
                }
            }

            "6" => return Ok(()),

            _ => writeln!(out, "Invalid option. Please try again.")?,
        }
    }
}

/// Runs the per-list submenu until the user returns or input ends
fn manage_items<R, W>(
    catalog: &mut Catalog,
    store: &Store,
    list_name: &str,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        // The list may vanish if a future menu gains nested deletes; bail
        // quietly rather than panic
        let Some(list) = catalog.get_list(list_name) else {
            return Ok(());
        };

        writeln!(out)?;
        writeln!(out, "Managing list: {}", list_name)?;
        for (depth, item) in list.walk() {
            writeln!(out, "{}{}", " ".repeat(depth * 2), item)?;
        }
        writeln!(out, "1. Add item")?;
        writeln!(out, "2. Remove item")?;
        writeln!(out, "3. Rename item")?;
        writeln!(out, "4. Return to main menu")?;

        let Some(choice) = prompt(input, out, "Choose an option: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let Some(name) = prompt(input, out, "Enter item name: ")? else {
                    return Ok(());
                };
                if name.trim().is_empty() {
                    writeln!(out, "Item name must not be empty.")?;
                    continue;
                }
                let Some(list) = catalog.get_list_mut(list_name) else {
                    return Ok(());
                };
                match list.add_child(Node::new(name.as_str())) {
                    Ok(()) => store.save(catalog),
                    Err(err) => {
                        writeln!(out, "{}. Please choose another name.", err)?;
                        continue;
                    }
                };
            }

            "2" => {
                let Some(name) = prompt(input, out, "Enter item name to remove: ")? else {
                    return Ok(());
                };
                let Some(list) = catalog.get_list_mut(list_name) else {
                    return Ok(());
                };
                list.remove_child(&name);
                store.save(catalog);
            }

            "3" => {
                let Some(old) = prompt(input, out, "Enter old item name: ")? else {
                    return Ok(());
                };
                let Some(new) = prompt(input, out, "Enter new item name: ")? else {
                    return Ok(());
                };
                if new.trim().is_empty() {
                    writeln!(out, "Item name must not be empty.")?;
                    continue;
                }
                let Some(list) = catalog.get_list_mut(list_name) else {
                    return Ok(());
                };
                // Missing item is a quiet no-op; new name is never checked
                // against siblings
                if let Some(item) = list.child_mut(&old) {
                    item.rename(new.as_str());
                }
                store.save(catalog);
            }

            "4" => return Ok(()),

            _ => writeln!(out, "Invalid option. Please try again.")?,
        }
    }
}

fn display_lists<W: Write>(catalog: &Catalog, out: &mut W) -> io::Result<()> {
    if catalog.is_empty() {
        writeln!(out, "No lists available.")
    } else {
        writeln!(out, "Available lists:")?;
        let mut names: Vec<&str> = catalog.list_names().collect();
        names.sort_unstable();
        for name in names {
            writeln!(out, "{}", name)?;
        }
        Ok(())
    }
}

/// Prints a prompt and reads one trimmed line; `None` on end of input
fn prompt<R, W>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
