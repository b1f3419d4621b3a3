//! Equipment catalog and loadout store.
//!
//! Users browse a fixed equipment catalog, assemble a *loadout* (one primary
//! weapon, one secondary weapon and two distinct gadgets), save it, and later
//! view, edit or delete it. The crate holds every layer of that flow:
//!
//! - [`Armory`]: the DuckDB-backed store with catalog and loadout queries.
//! - [`AsyncArmory`]: the same store driven from async code.
//! - [`server`]: the REST API over the store.
//! - [`client`]: a typed HTTP client for that API.
//! - [`ui`]: per-view state for the builder, detail and edit screens.
//!
//! # Quick start
//!
//! ```no_run
//! use armory::Armory;
//!
//! let armory = Armory::builder().in_memory().build().unwrap();
//! let catalog = armory.equipments().list().unwrap();
//! let saved = armory.loadouts().list().unwrap();
//! ```

pub mod async_store;
pub mod client;
pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod queries;
pub mod server;
pub mod sql_builder;
pub mod ui;

pub use async_store::AsyncArmory;
pub use client::{ArmoryClient, ClientError};
pub use connection::Connection;
pub use error::{ArmoryError, Result};
pub use sql_builder::SqlBuilder;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use models::Equipment;

// ---------------------------------------------------------------------------
// ArmoryBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`Armory`] instance.
///
/// Use [`Armory::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](ArmoryBuilder::build) to open the store.
#[derive(Default)]
pub struct ArmoryBuilder {
    database: Option<PathBuf>,
    in_memory: bool,
    catalog: Option<PathBuf>,
}

impl ArmoryBuilder {
    /// Use a specific database file.
    ///
    /// If not set, `armory.duckdb` under the platform data directory is used
    /// (e.g. `~/.local/share/armory` on Linux).
    pub fn database<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database = Some(path.as_ref().to_path_buf());
        self.in_memory = false;
        self
    }

    /// Keep everything in memory. Nothing survives the process.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Import a JSON catalog file once the store is open.
    pub fn catalog<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.catalog = Some(path.as_ref().to_path_buf());
        self
    }

    /// Open the store, bootstrapping the schema and seeding the catalog if
    /// one was configured.
    pub fn build(self) -> Result<Armory> {
        let conn = if self.in_memory {
            Connection::open_in_memory()?
        } else {
            let path = self.database.unwrap_or_else(config::default_database_path);
            Connection::open(&path)?
        };
        let armory = Armory { conn };
        if let Some(catalog) = self.catalog {
            armory.import_catalog_file(&catalog)?;
        }
        Ok(armory)
    }
}

// ---------------------------------------------------------------------------
// Armory
// ---------------------------------------------------------------------------

/// The main entry point for the store.
///
/// Wraps a [`Connection`] and exposes the catalog and loadout query
/// interfaces as lightweight borrowing wrappers.
pub struct Armory {
    conn: Connection,
}

impl Armory {
    /// Create a new builder for configuring the store.
    pub fn builder() -> ArmoryBuilder {
        ArmoryBuilder::default()
    }

    /// Wrap an already opened connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Access the equipment catalog.
    pub fn equipments(&self) -> queries::EquipmentQuery<'_> {
        queries::EquipmentQuery::new(&self.conn)
    }

    /// Access the loadout store.
    pub fn loadouts(&self) -> queries::LoadoutQuery<'_> {
        queries::LoadoutQuery::new(&self.conn)
    }

    /// Read a JSON array of equipment from disk and import it.
    ///
    /// Returns the number of entries imported.
    pub fn import_catalog_file(&self, path: &Path) -> Result<usize> {
        let contents = fs::read_to_string(path)?;
        let items: Vec<Equipment> = serde_json::from_str(&contents)?;
        tracing::info!(path = %path.display(), count = items.len(), "seeding catalog");
        self.equipments().import(&items)
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Armory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.conn.path() {
            Some(path) => write!(f, "Armory(database={})", path.display()),
            None => write!(f, "Armory(database=:memory:)"),
        }
    }
}
