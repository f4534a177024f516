//! SQLite-backed storage for meeting records.
//!
//! One table, `meetings`, with no indexes beyond the primary key. The
//! connection is opened once at startup and held for the process lifetime
//! behind a mutex in [`crate::state::AppState`]; each operation is a single
//! statement, atomic at the row level.

use std::path::Path;

use rusqlite::Connection;

pub mod types;
pub use types::*;

pub mod meetings;

pub struct MeetingDb {
    conn: Connection,
}

impl MeetingDb {
    /// Borrow the underlying connection for ad-hoc queries.
    pub fn conn_ref(&self) -> &Connection {
        &self.conn
    }

    /// Open (or create) the database at `path` and bring the schema up to date.
    pub fn open_at(path: &Path) -> Result<Self, DbError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(DbError::CreateDir)?;
            }
        }

        let conn = Connection::open(path)?;

        // Enable WAL mode for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;

        crate::migrations::run_migrations(&conn).map_err(DbError::Migration)?;

        Ok(Self { conn })
    }
}

// =============================================================================
// Shared test utilities
// =============================================================================

#[cfg(test)]
pub mod test_utils {
    use super::MeetingDb;

    /// Create a temporary database for testing.
    ///
    /// We leak the `TempDir` so the directory persists for the duration of the
    /// test. Test temp dirs are cleaned up by the OS.
    pub fn test_db() -> MeetingDb {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("test.db");
        std::mem::forget(dir);
        MeetingDb::open_at(&path).expect("Failed to open test database")
    }
}

// =============================================================================
// Tests
// =============================================================================
