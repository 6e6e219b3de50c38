//! State blob repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Load and save the persisted checklist snapshot as an opaque text blob
//!   under a fixed storage key.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - At most one row exists per storage key; saves upsert in place.
//! - Repositories never interpret blob contents.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed storage key for the checklist snapshot blob.
pub const STATE_KEY: &str = "camping-checklist-state";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for state blob persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for the persisted checklist snapshot.
///
/// The store swallows every error this trait returns; implementations
/// report failures honestly and leave the degrade-gracefully policy to
/// the caller.
pub trait StateRepository {
    /// Returns the stored blob, or `None` when nothing was saved yet.
    fn load_blob(&self) -> RepoResult<Option<String>>;

    /// Writes `blob`, replacing any previous value for the key.
    fn save_blob(&self, blob: &str) -> RepoResult<()>;
}

/// SQLite-backed state repository over the `app_state` key/value table.
pub struct SqliteStateRepository {
    conn: Connection,
}

impl SqliteStateRepository {
    /// Wraps an already-bootstrapped connection (see `db::open_db`).
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl StateRepository for SqliteStateRepository {
    fn load_blob(&self) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1;",
                [STATE_KEY],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn save_blob(&self, blob: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO app_state (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![STATE_KEY, blob],
        )?;
        Ok(())
    }
}
