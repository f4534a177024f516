//! Shared type definitions for the database layer.

use thiserror::Error;

/// Errors specific to database operations.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Failed to create database directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Schema migration failed: {0}")]
    Migration(String),
}

/// A row from the `meetings` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbMeeting {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub link: String,
    pub participants: String,
    pub owner: String,
    pub completed: bool,
    pub created_at: String,
}
