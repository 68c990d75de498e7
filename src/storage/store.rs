//! Whole-catalog snapshot persistence
//!
//! The entire catalog is one JSON document at a single location, read once
//! at startup and fully rewritten after every mutation. Failures never
//! propagate past this module: a missing snapshot yields an empty catalog,
//! and an unreadable or corrupt one is treated the same way, with the
//! reason carried in the load status so the caller can warn the user
//! instead of losing data silently.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::domain::Catalog;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    lists: &'a Catalog,
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    lists: Catalog,
}

/// How a catalog came back from disk
#[derive(Debug)]
pub enum LoadStatus {
    /// No snapshot existed yet
    Fresh,
    /// Snapshot read and parsed
    Existing,
    /// A snapshot was present but unusable; starting over empty
    Recovered(anyhow::Error),
}

/// A loaded catalog together with how the load went
#[derive(Debug)]
pub struct LoadOutcome {
    pub catalog: Catalog,
    pub status: LoadStatus,
}

/// Persistence boundary for a [`Catalog`]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates a store backed by the given snapshot file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default snapshot location in the platform data dir
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "gear")
            .context("Could not determine a data directory for this platform")?;
        Ok(dirs.data_dir().join("inventory.json"))
    }

    /// Returns the snapshot file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the catalog, degrading to empty on any failure
    ///
    /// This is the only failure policy the store has: corrupt data is
    /// treated like absent data, and the reason travels in
    /// [`LoadStatus::Recovered`] rather than as an error.
    pub fn load(&self) -> LoadOutcome {
        match self.try_load() {
            Ok(Some(catalog)) => LoadOutcome {
                catalog,
                status: LoadStatus::Existing,
            },
            Ok(None) => LoadOutcome {
                catalog: Catalog::new(),
                status: LoadStatus::Fresh,
            },
            Err(reason) => LoadOutcome {
                catalog: Catalog::new(),
                status: LoadStatus::Recovered(reason),
            },
        }
    }

    /// Reads and parses the snapshot; `None` when the file does not exist
    pub fn try_load(&self) -> Result<Option<Catalog>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let snapshot: Snapshot = serde_json::from_str(&raw)
            .with_context(|| format!("Snapshot {} is not valid", self.path.display()))?;

        if snapshot.version != SNAPSHOT_VERSION {
            bail!(
                "Snapshot {} has unsupported version {}",
                self.path.display(),
                snapshot.version
            );
        }

        Ok(Some(snapshot.lists))
    }

    /// Persists the catalog, reporting failure without interrupting the caller
    ///
    /// The in-memory catalog is never touched; a failed save leaves the
    /// previous snapshot in place and the program carries on. Returns
    /// whether the snapshot actually reached disk.
    pub fn save(&self, catalog: &Catalog) -> bool {
        match self.try_save(catalog) {
            Ok(()) => true,
            Err(err) => {
                eprintln!("Warning: could not save inventory: {:#}", err);
                false
            }
        }
    }

    /// Serializes the full catalog and atomically replaces the snapshot
    pub fn try_save(&self, catalog: &Catalog) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let snapshot = SnapshotRef {
            version: SNAPSHOT_VERSION,
            lists: catalog,
        };
        let json =
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize inventory")?;

        // Write to a temp file first, then rename over the snapshot
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}
