//! Conference REST routes. Reads are public; mutations need an admin session.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use super::auth::AdminSession;
use crate::services::conference::{self, Conference, ConferenceError, ConferenceStats, NewConference};
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

pub(crate) fn conference_error_to_status(err: &ConferenceError) -> StatusCode {
    match err {
        ConferenceError::Invalid(_) => StatusCode::BAD_REQUEST,
        ConferenceError::NotFound => StatusCode::NOT_FOUND,
        ConferenceError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Map a service error to a response. Database detail is logged, not returned.
pub(crate) fn conference_error_response(err: ConferenceError) -> Response {
    let status = conference_error_to_status(&err);
    let message = match &err {
        ConferenceError::Db(e) => {
            tracing::error!(error = %e, "conference store failed");
            "internal error".to_owned()
        }
        other => other.to_string(),
    };
    (status, Json(ErrorBody { message })).into_response()
}

fn parse_id(raw: &str) -> Result<Uuid, ConferenceError> {
    Uuid::parse_str(raw).map_err(|_| ConferenceError::NotFound)
}

/// `GET /api/conferences`
pub async fn list_conferences(State(state): State<AppState>) -> Result<Json<Vec<Conference>>, Response> {
    state
        .conferences
        .list()
        .await
        .map(Json)
        .map_err(conference_error_response)
}

/// `GET /api/conferences/stats`
pub async fn conference_stats(State(state): State<AppState>) -> Result<Json<ConferenceStats>, Response> {
    let items = state
        .conferences
        .list()
        .await
        .map_err(conference_error_response)?;
    let today = OffsetDateTime::now_utc().date();
    Ok(Json(conference::compute_stats(&items, today)))
}

/// `GET /api/conferences/{id}`
pub async fn get_conference(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Conference>, Response> {
    let id = parse_id(&id).map_err(conference_error_response)?;
    state
        .conferences
        .get(id)
        .await
        .map(Json)
        .map_err(conference_error_response)
}

/// `POST /api/conferences`
pub async fn create_conference(
    State(state): State<AppState>,
    admin: AdminSession,
    Json(body): Json<NewConference>,
) -> Result<(StatusCode, Json<Conference>), Response> {
    let input = conference::normalize(body).map_err(conference_error_response)?;
    let created = state
        .conferences
        .create(input)
        .await
        .map_err(conference_error_response)?;
    tracing::info!(id = %created.id, name = %created.name, admin = %admin.email, "conference created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// `DELETE /api/conferences/{id}`
pub async fn delete_conference(
    State(state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<String>,
) -> Result<StatusCode, Response> {
    let id = parse_id(&id).map_err(conference_error_response)?;
    state
        .conferences
        .delete(id)
        .await
        .map_err(conference_error_response)?;
    tracing::info!(%id, admin = %admin.email, "conference deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "conferences_test.rs"]
mod tests;
