use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;

use crate::error::Result;
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;

/// `POST /api/shorten`
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>> {
    let Json(request) = payload?;
    let url = request.validate()?;
    let record = state.shortener().create_short_url(&url)?;

    let settings = state.settings();
    let short_url = record
        .short_key()
        .to_url(&settings.base_url, &settings.short_url_prefix);

    info!(key = %record.short_key(), url = %record.original_url(), "shortened url");

    Ok(Json(ShortenResponse {
        original_url: record.original_url().to_owned(),
        short_key: record.short_key().to_string(),
        short_url,
    }))
}

/// `GET /r/{key}`: 302 to the original URL.
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let record = state.shortener().resolve(&key)?;

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, record.original_url().to_owned())],
    )
        .into_response())
}
