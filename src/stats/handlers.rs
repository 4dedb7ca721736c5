use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    state::AppState,
    stats::{
        dto::{DashboardResponse, LeaderboardEntry},
        repo,
        services::{dashboard_summary, rank_users},
    },
};

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard/:user_id", get(dashboard))
}

pub fn leaderboard_routes() -> Router<AppState> {
    Router::new().route("/leaderboard", get(leaderboard))
}

#[instrument(skip(state))]
pub async fn dashboard(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<DashboardResponse>, ApiError> {
    // Dashboards are private: the path id must be the caller's own.
    if caller != user_id {
        warn!(%caller, requested = %user_id, "dashboard access denied");
        return Err(ApiError::Forbidden);
    }

    let total_weight = repo::total_weight_for_user(&state.db, user_id).await?;
    Ok(Json(dashboard_summary(total_weight)))
}

#[instrument(skip(state))]
pub async fn leaderboard(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    let totals = repo::totals_for_all_users(&state.db).await?;
    Ok(Json(rank_users(totals)))
}
