use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, redirect_handler, shorten_handler, top_domains_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        let redirect_route = redirect_route(&state.settings().short_url_prefix);

        Router::new()
            .route("/health", get(health_handler))
            .route(&redirect_route, get(redirect_handler))
            .nest(
                "/api",
                Router::new()
                    .route("/shorten", post(shorten_handler))
                    .route("/metrics/top-domains", get(top_domains_handler)),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

/// Route serving short URLs, e.g. `/r/` becomes `/r/{key}`.
fn redirect_route(prefix: &str) -> String {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        "/{key}".to_owned()
    } else {
        format!("/{}/{{key}}", prefix)
    }
}
