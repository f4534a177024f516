//! Process-wide state shared across request handlers.

use std::sync::{Arc, Mutex};

use crate::db::MeetingDb;

/// Application state injected into every handler.
///
/// The database handle is constructed once at startup and passed in, never
/// reached through a global. Requests serialize on the mutex; the application
/// imposes no further isolation, so concurrent writes to the same id resolve
/// by last commit.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<MeetingDb>>,
}

impl AppState {
    pub fn new(db: MeetingDb) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }
}
