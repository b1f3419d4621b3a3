//! Async wrapper around [`Armory`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all store operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! The single DuckDB connection sits behind a mutex, so concurrent writes are
//! serialized here and the store's unique constraint settles name races.
//!
//! # Example
//!
//! ```no_run
//! use armory::AsyncArmory;
//!
//! #[tokio::main]
//! async fn main() {
//!     let armory = AsyncArmory::builder().in_memory().build().await.unwrap();
//!
//!     let loadouts = armory.run(|a| a.loadouts().list()).await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{ArmoryError, Result};
use crate::Armory;

// ---------------------------------------------------------------------------
// AsyncArmoryBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncArmory`] instance.
#[derive(Default)]
pub struct AsyncArmoryBuilder {
    database: Option<PathBuf>,
    in_memory: bool,
    catalog: Option<PathBuf>,
}

impl AsyncArmoryBuilder {
    /// Use a specific database file.
    pub fn database<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database = Some(path.as_ref().to_path_buf());
        self.in_memory = false;
        self
    }

    /// Keep everything in memory.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Import a JSON catalog file once the store is open.
    pub fn catalog<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.catalog = Some(path.as_ref().to_path_buf());
        self
    }

    /// Open the store on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncArmory> {
        tokio::task::spawn_blocking(move || {
            let mut builder = Armory::builder();
            if let Some(path) = self.database {
                builder = builder.database(path);
            }
            if self.in_memory {
                builder = builder.in_memory();
            }
            if let Some(catalog) = self.catalog {
                builder = builder.catalog(catalog);
            }
            Ok(AsyncArmory::new(builder.build()?))
        })
        .await
        .map_err(|e| ArmoryError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncArmory
// ---------------------------------------------------------------------------

/// Async wrapper around [`Armory`].
///
/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct AsyncArmory {
    inner: Arc<Mutex<Armory>>,
}

impl AsyncArmory {
    /// Create a new builder for configuring the async store.
    pub fn builder() -> AsyncArmoryBuilder {
        AsyncArmoryBuilder::default()
    }

    /// Wrap an already opened store.
    pub fn new(armory: Armory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(armory)),
        }
    }

    /// Run a sync store operation on the blocking thread pool.
    ///
    /// The closure receives an `&Armory` reference and should return a
    /// `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Armory) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let armory = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = armory
                .lock()
                .map_err(|_| ArmoryError::InvalidArgument("store lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| ArmoryError::InvalidArgument(format!("Task join error: {e}")))?
    }
}
