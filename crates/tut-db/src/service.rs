//! Service layer owning the database handle.
//!
//! `TutorialService` wraps `TutDb`. Repository methods are implemented as
//! `impl TutorialService` blocks under `repos/`.

use std::path::Path;

use tut_config::DatabaseConfig;

use crate::TutDb;
use crate::error::DatabaseError;

/// Scoped handle to one tutorials store.
///
/// Each value owns its own connection; tests build one per case and drop it
/// at the end, which discards in-memory storage.
pub struct TutorialService {
    db: TutDb,
}

impl TutorialService {
    /// Create a service over a local database file (or `":memory:"`).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = TutDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create a service over a fresh in-memory database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be created.
    pub async fn in_memory() -> Result<Self, DatabaseError> {
        let db = TutDb::open_in_memory().await?;
        Ok(Self { db })
    }

    /// Create a service from configuration, creating the parent directory of
    /// a file database when missing.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Io` if the directory cannot be created, or any
    /// error from opening the database.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if !config.is_in_memory() {
            if let Some(parent) = Path::new(&config.path).parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    tracing::warn!(dir = %parent.display(), "database directory missing, creating it");
                    std::fs::create_dir_all(parent)?;
                }
            }
        }
        Self::new_local(&config.path).await
    }

    /// Create from an existing `TutDb`.
    #[must_use]
    pub const fn from_db(db: TutDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &TutDb {
        &self.db
    }
}
