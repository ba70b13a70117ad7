use serde_json::Value;

use crate::error::AppError;

/// Parse a request body as JSON. The Content-Type must be a JSON media type.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, AppError> {
    let Some(ct) = content_type else {
        tracing::debug!("Rejecting body without content-type");
        return Err(AppError::InvalidJson);
    };

    if !is_json_media_type(ct) {
        tracing::debug!("Rejecting body with content-type {ct}");
        return Err(AppError::InvalidJson);
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Invalid JSON body: {e}");
        AppError::InvalidJson
    })
}

fn is_json_media_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_json_with_charset() {
        let value = parse_body(Some("application/json; charset=utf-8"), br#"{"a":1}"#).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn rejects_missing_content_type() {
        assert!(matches!(parse_body(None, br#"{"a":1}"#), Err(AppError::InvalidJson)));
    }

    #[test]
    fn accepts_structured_json_suffix() {
        assert!(parse_body(Some("application/vnd.survey+json"), b"{}").is_ok());
    }

    #[test]
    fn rejects_form_content_type() {
        let err = parse_body(Some("application/x-www-form-urlencoded"), br#"{"a":1}"#);
        assert!(matches!(err, Err(AppError::InvalidJson)));
    }

    #[test]
    fn rejects_malformed_and_empty_bodies() {
        assert!(matches!(parse_body(Some("application/json"), b"{not json"), Err(AppError::InvalidJson)));
        assert!(matches!(parse_body(Some("application/json"), b""), Err(AppError::InvalidJson)));
    }
}
