use axum::extract::State;
use axum::Json;
use chrono::SecondsFormat;
use serde_json::{Value, json};

use crate::state::SharedState;

pub async fn ping(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "API is alive",
        "utc_time": state.clock.now().to_rfc3339_opts(SecondsFormat::Micros, false),
    }))
}
