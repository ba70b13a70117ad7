pub mod clock;
pub mod config;
pub mod crypto;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod storage;
pub mod submission;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::state::{AppState, SharedState};
use crate::storage::SurveyLog;

pub fn build_app(config: Config) -> (Router, SharedState) {
    build_app_with_clock(config, Arc::new(SystemClock))
}

/// Build the router with an explicit clock, so receipt times and hour
/// buckets can be pinned.
pub fn build_app_with_clock(config: Config, clock: Arc<dyn Clock>) -> (Router, SharedState) {
    let state: SharedState = Arc::new(AppState {
        log: SurveyLog::new(config.log_path.clone()),
        config,
        clock,
    });

    let app = Router::new()
        .merge(routes::health_routes())
        .merge(routes::survey_routes())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    (app, state)
}
