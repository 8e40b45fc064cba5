//! Dashboard routes.

use axum::{Json, Router, extract::State, routing::get};
use chrono::Utc;
use invoicer_core::dashboard::DashboardMetrics;

use crate::{AppState, error::ApiError};

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}

/// GET /dashboard
async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardMetrics>, ApiError> {
    Ok(Json(state.store.dashboard(Utc::now().date_naive()).await?))
}
