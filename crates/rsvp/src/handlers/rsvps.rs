//! RSVP CRUD handlers.
//!
//! These handlers use the repository trait object for database access. Cache
//! population and eviction happen inside the cached repository decorator;
//! the handlers only validate and route.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use rsvp_core::rsvp::{Rsvp, RsvpRequest};
use rsvp_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// Create a new RSVP (POST /rsvps).
///
/// Any `id` in the body is ignored; the store assigns one.
pub async fn create_rsvp(
    State(state): State<AppState>,
    payload: Result<Json<RsvpRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Rsvp>), AppError> {
    let Json(request) = payload?;
    tracing::debug!(request = ?request, "Received create rsvp request");

    let new_rsvp = request.into_new_rsvp()?;
    let created = state.rsvp_repo.create_rsvp(&new_rsvp).await?;

    tracing::info!(rsvp_id = created.id, guest_name = %created.guest_name, "Created rsvp");

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a single RSVP by ID (GET /rsvps/{id}).
pub async fn get_rsvp(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Rsvp>, AppError> {
    let Path(id) = path?;

    match state.rsvp_repo.get_rsvp(id).await? {
        Some(rsvp) => Ok(Json(rsvp)),
        None => Err(RepositoryError::rsvp_not_found(id).into()),
    }
}

/// List all RSVPs (GET /rsvps).
pub async fn list_rsvps(State(state): State<AppState>) -> Result<Json<Vec<Rsvp>>, AppError> {
    let rsvps = state.rsvp_repo.list_rsvps().await?;
    Ok(Json(rsvps))
}

/// Update an RSVP by ID (PUT /rsvps/{id}).
///
/// A body `id`, if present, must match the path.
pub async fn update_rsvp(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<RsvpRequest>, JsonRejection>,
) -> Result<Json<Rsvp>, AppError> {
    let Path(id) = path?;
    let Json(request) = payload?;

    update_rsvp_impl(&state, Some(id), request).await
}

/// Update an RSVP identified by the body's `id` (PUT /rsvps).
pub async fn update_rsvp_from_body(
    State(state): State<AppState>,
    payload: Result<Json<RsvpRequest>, JsonRejection>,
) -> Result<Json<Rsvp>, AppError> {
    let Json(request) = payload?;

    update_rsvp_impl(&state, None, request).await
}

async fn update_rsvp_impl(
    state: &AppState,
    path_id: Option<i64>,
    request: RsvpRequest,
) -> Result<Json<Rsvp>, AppError> {
    tracing::debug!(path_id = ?path_id, request = ?request, "Received update rsvp request");

    let rsvp = request.into_rsvp(path_id)?;
    state.rsvp_repo.update_rsvp(&rsvp).await?;

    tracing::info!(rsvp_id = rsvp.id, "Updated rsvp");

    Ok(Json(rsvp))
}

/// Delete an RSVP by ID (DELETE /rsvps/{id}).
///
/// Deleting an ID that does not exist succeeds.
pub async fn delete_rsvp(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    tracing::debug!(rsvp_id = id, "Received delete rsvp request");

    state.rsvp_repo.delete_rsvp(id).await?;

    tracing::info!(rsvp_id = id, "Deleted rsvp");

    Ok(StatusCode::OK)
}
