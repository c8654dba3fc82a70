use axum::extract::State;
use axum::Json;
use shorty_shortener::DomainCount;

use crate::state::AppState;

/// `GET /api/metrics/top-domains`
pub async fn top_domains_handler(State(state): State<AppState>) -> Json<Vec<DomainCount>> {
    Json(state.metrics().top_domains())
}
