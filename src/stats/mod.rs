pub(crate) mod dto;
pub mod handlers;
pub(crate) mod repo;
mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::dashboard_routes())
        .merge(handlers::leaderboard_routes())
}
