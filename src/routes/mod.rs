pub mod health;
pub mod survey;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::state::SharedState;

pub fn health_routes() -> Router<SharedState> {
    Router::new().route("/ping", get(health::ping))
}

/// Public `/v1` intake routes. Cross-origin requests are allowed from anywhere.
pub fn survey_routes() -> Router<SharedState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(86400));

    Router::new()
        .route("/v1/survey", post(survey::submit))
        .layer(cors)
}
