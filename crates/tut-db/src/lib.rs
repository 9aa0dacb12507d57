//! # tut-db
//!
//! libSQL record store for the tutorials catalogue.
//!
//! Owns every stored `Tutorial`. Callers get value copies back and must
//! write changes through the store (`save_tutorial`, `update_tutorial`) for
//! them to become visible to queries.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Path understood by libSQL as a private in-memory database.
pub const MEMORY_PATH: &str = ":memory:";

/// Central database handle for the tutorials store.
///
/// Wraps a libSQL database and connection. Dropping the handle closes the
/// connection; an in-memory database disappears with it.
pub struct TutDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl TutDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let tut_db = Self { db, conn };
        tut_db.run_migrations().await?;
        tracing::debug!(path, "opened tutorials database");
        Ok(tut_db)
    }

    /// Open a fresh private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if libSQL cannot create the database.
    pub async fn open_in_memory() -> Result<Self, DatabaseError> {
        Self::open_local(MEMORY_PATH).await
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
