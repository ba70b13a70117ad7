use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::Json;
use serde_json::{Value, json};

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::metadata::{self, PeerAddr};
use crate::submission::{parser, record, validate};

pub async fn submit(
    State(state): State<SharedState>,
    PeerAddr(peer_ip): PeerAddr,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let raw = parser::parse_body(content_type, &body)?;

    let submission = validate::validate(&raw).map_err(|errors| {
        tracing::debug!(
            fields = ?errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>(),
            "Survey submission failed validation"
        );
        AppError::Validation(errors)
    })?;

    let ip = metadata::origin_ip(&headers, peer_ip);
    let stored = record::build(submission, state.clock.now(), ip);

    state.log.append(&stored).await?;

    tracing::info!(submission_id = %stored.submission_id, "Stored survey submission");

    Ok((StatusCode::CREATED, Json(json!({ "status": "ok" }))))
}
