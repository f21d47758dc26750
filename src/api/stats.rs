//! Dashboard statistics endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, services::stats::StatsSnapshot};

/// Get aggregate statistics for the dashboard
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Current dashboard counters", body = StatsSnapshot)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<StatsSnapshot>> {
    let snapshot = state.services.stats.overview().await?;
    Ok(Json(snapshot))
}
