//! Main CLI application structure

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{item_cmd, list_cmd, shell};
use crate::storage::{Config, LoadOutcome, LoadStatus, Store};

#[derive(Parser)]
#[command(name = "gear")]
#[command(author, version, about = "Personal inventory organizer")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Inventory snapshot file (defaults to the platform data dir)
    #[arg(long, global = true, env = "GEAR_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show all list names
    Lists,

    /// Manage lists
    #[command(subcommand)]
    List(list_cmd::ListCommands),

    /// Show a list as an indented tree
    Show {
        /// List name
        name: String,
    },

    /// Manage items within a list
    #[command(subcommand)]
    Item(item_cmd::ItemCommands),

    /// Run the interactive menu
    Shell,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    let config = Config::load()?;
    let store = open_store(cli.file, &config)?;
    output.verbose(&format!("Using inventory file {}", store.path().display()));

    let LoadOutcome { mut catalog, status } = store.load();
    match &status {
        LoadStatus::Fresh => output.verbose("No inventory yet; starting empty"),
        LoadStatus::Existing => {
            output.verbose(&format!("Loaded {} list(s)", catalog.len()));
        }
        LoadStatus::Recovered(reason) => {
            output.warn(&format!(
                "Existing inventory could not be read ({:#}); starting with an empty one",
                reason
            ));
        }
    }

    match cli.command {
        Commands::Lists => list_cmd::show_all(&output, &catalog),
        Commands::List(cmd) => list_cmd::run(cmd, &output, &mut catalog, &store)?,
        Commands::Show { name } => {
            list_cmd::show_tree(&output, &catalog, &name, config.indent_width)?
        }
        Commands::Item(cmd) => item_cmd::run(cmd, &output, &mut catalog, &store)?,
        Commands::Shell => {
            shell::run(&mut catalog, &store, &mut io::stdin().lock(), &mut io::stdout())?
        }
    }

    Ok(())
}

fn open_store(flag: Option<PathBuf>, config: &Config) -> Result<Store> {
    let path = match flag.or_else(|| config.data_file.clone()) {
        Some(path) => path,
        None => Store::default_path()?,
    };
    Ok(Store::new(path))
}

/// Rejects blank names before they reach the catalog
pub(super) fn require_name(kind: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("{} name must not be empty", kind);
    }
    Ok(())
}
