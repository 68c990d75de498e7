//! # Storage Layer
//!
//! Persistence for the inventory organizer.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Catalog | JSON snapshot (versioned envelope) | data dir `gear/inventory.json` |
//! | Config | TOML | config dir `gear/config.toml` |
//!
//! The snapshot is read once at startup and fully rewritten after every
//! mutating command; writes go through a temp file + rename so a crashed
//! save never leaves a half-written snapshot behind. Load failures degrade
//! to an empty catalog (see [`Store::load`]) rather than aborting.

mod config;
mod store;

pub use config::{Config, ConfigError};
pub use store::{LoadOutcome, LoadStatus, Store, SNAPSHOT_VERSION};
