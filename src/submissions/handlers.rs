use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    state::AppState,
    submissions::{
        dto::{SubmissionBody, SubmissionResponse},
        repo,
        services::{parse_weight, WasteType},
    },
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/submissions", get(list_submissions))
        .route("/submissions/:id", get(get_submission))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/submissions", post(create_submission))
        .route("/submissions/:id", put(update_submission))
        .route("/submissions/:id", delete(delete_submission))
}

#[instrument(skip(state))]
pub async fn list_submissions(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<SubmissionResponse>>, ApiError> {
    let rows = repo::list_by_user(&state.db, user_id).await?;
    Ok(Json(rows.into_iter().map(SubmissionResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_submission(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let row = repo::get_owned(&state.db, user_id, id)
        .await?
        .ok_or(ApiError::NotFound("Submission"))?;
    Ok(Json(row.into()))
}

#[instrument(skip(state, payload))]
pub async fn create_submission(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<SubmissionBody>,
) -> Result<(StatusCode, Json<SubmissionResponse>), ApiError> {
    let waste_type = WasteType::parse(&payload.waste_type)?;
    let weight = parse_weight(payload.weight_kg)?;

    let row = repo::insert(&state.db, user_id, waste_type.as_str(), weight).await?;

    info!(user_id = %user_id, submission_id = %row.id, waste_type = %row.waste_type, "submission created");
    Ok((StatusCode::CREATED, Json(row.into())))
}

#[instrument(skip(state, payload))]
pub async fn update_submission(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SubmissionBody>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let waste_type = WasteType::parse(&payload.waste_type)?;
    let weight = parse_weight(payload.weight_kg)?;

    // The owner filter in the query makes other users' rows read as missing,
    // so cross-owner updates answer 404 rather than 403.
    let row = repo::update_owned(&state.db, user_id, id, waste_type.as_str(), weight)
        .await?
        .ok_or(ApiError::NotFound("Submission"))?;

    info!(user_id = %user_id, submission_id = %row.id, "submission updated");
    Ok(Json(row.into()))
}

#[instrument(skip(state))]
pub async fn delete_submission(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = repo::delete_owned(&state.db, user_id, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Submission"));
    }

    info!(user_id = %user_id, submission_id = %id, "submission deleted");
    Ok(StatusCode::NO_CONTENT)
}
