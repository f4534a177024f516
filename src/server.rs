//! HTTP surface: router construction and request handlers.
//!
//! Four routes over one table. Every mutation answers with a 303 redirect
//! back to the list view; complete/delete on an id that no longer exists
//! still redirect (idempotent-by-absence).

use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::types::{NewMeeting, SortKey};
use crate::views;

/// Query string for the list view. Unrecognized sort values disable sorting.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub sort: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add", post(add_meeting))
        .route("/complete/{id}", post(complete_meeting))
        .route("/delete/{id}", post(delete_meeting))
        .with_state(state)
}

/// `GET /`: pending meetings (sorted when a valid key is given) plus
/// completed meetings (always insertion order).
async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, AppError> {
    let sort = params.sort.as_deref().and_then(SortKey::from_param);

    let db = state.db.lock().map_err(|_| AppError::LockPoisoned)?;
    let pending = db.list_meetings(false, sort)?;
    let completed = db.list_meetings(true, None)?;

    Ok(Html(views::render_index(&pending, &completed)))
}

/// `POST /add`: insert a pending meeting and bounce back to the list.
async fn add_meeting(
    State(state): State<AppState>,
    Form(form): Form<NewMeeting>,
) -> Result<Redirect, AppError> {
    form.validate().map_err(AppError::Invalid)?;

    let db = state.db.lock().map_err(|_| AppError::LockPoisoned)?;
    let id = db.insert_meeting(&form)?;
    log::info!("added meeting {id}: {}", form.title);

    Ok(Redirect::to("/"))
}

/// `POST /complete/{id}`: flip `completed`; missing ids are a silent no-op.
async fn complete_meeting(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockPoisoned)?;
    if db.mark_completed(id)? {
        log::info!("marked meeting {id} completed");
    } else {
        log::warn!("complete requested for unknown meeting {id}");
    }

    Ok(Redirect::to("/"))
}

/// `POST /delete/{id}`: remove the record; missing ids are a silent no-op.
async fn delete_meeting(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    let db = state.db.lock().map_err(|_| AppError::LockPoisoned)?;
    if db.delete_meeting(id)? {
        log::info!("deleted meeting {id}");
    } else {
        log::warn!("delete requested for unknown meeting {id}");
    }

    Ok(Redirect::to("/"))
}
