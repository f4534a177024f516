pub mod db;
pub mod error;
pub mod migrations;
pub mod server;
pub mod state;
pub mod types;
pub mod views;

use std::path::PathBuf;

use crate::db::MeetingDb;
use crate::state::AppState;

/// Default listen address, overridable via `AGENDA_HTTP`.
const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:5000";

/// Default database file, overridable via `AGENDA_DB`.
const DEFAULT_DB_PATH: &str = "agenda.db";

/// Open the database, bind the listener, and serve until shutdown.
pub async fn run() -> Result<(), String> {
    let http_addr = std::env::var("AGENDA_HTTP").unwrap_or_else(|_| DEFAULT_HTTP_ADDR.into());
    let db_path =
        PathBuf::from(std::env::var("AGENDA_DB").unwrap_or_else(|_| DEFAULT_DB_PATH.into()));

    let db = MeetingDb::open_at(&db_path)
        .map_err(|e| format!("failed to open database at {}: {e}", db_path.display()))?;
    log::info!("database ready at {}", db_path.display());

    let state = AppState::new(db);
    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .map_err(|e| format!("failed to bind {http_addr}: {e}"))?;
    log::info!("agenda listening on http://{http_addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("server error: {e}"))
}
