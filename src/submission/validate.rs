use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::SurveySubmission;

/// A single field-level violation reported back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl FieldError {
    fn new(field: &str, reason: &str) -> Self {
        Self {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Validate an untyped JSON body into a `SurveySubmission`.
/// Collects every violation rather than stopping at the first.
pub fn validate(raw: &Value) -> Result<SurveySubmission, Vec<FieldError>> {
    let Some(obj) = raw.as_object() else {
        return Err(vec![FieldError::new("body", "must be a JSON object")]);
    };

    let mut errors = Vec::new();

    let name = required_string(obj, "name", &mut errors);
    let email = required_string(obj, "email", &mut errors).and_then(|email| {
        if email.trim().is_empty() {
            errors.push(FieldError::new("email", "must not be empty"));
            None
        } else {
            Some(email)
        }
    });

    let age = match present(obj, "age") {
        None => None,
        Some(Value::Number(n)) if n.is_i64() => n.as_i64(),
        Some(Value::Number(n)) if n.is_u64() => {
            errors.push(FieldError::new("age", "is out of range"));
            None
        }
        Some(_) => {
            errors.push(FieldError::new("age", "must be an integer"));
            None
        }
    };

    let consent = match present(obj, "consent") {
        None => {
            errors.push(FieldError::new("consent", "field required"));
            None
        }
        Some(Value::Bool(b)) => Some(*b),
        Some(_) => {
            errors.push(FieldError::new("consent", "must be a boolean"));
            None
        }
    };

    let rating = match present(obj, "rating") {
        None => {
            errors.push(FieldError::new("rating", "field required"));
            None
        }
        Some(Value::Number(n)) => Some(n.clone()),
        Some(_) => {
            errors.push(FieldError::new("rating", "must be a number"));
            None
        }
    };

    let comments = optional_string(obj, "comments", &mut errors);
    let user_agent = optional_string(obj, "user_agent", &mut errors);
    let submission_id = optional_string(obj, "submission_id", &mut errors);

    match (name, email, consent, rating) {
        (Some(name), Some(email), Some(consent), Some(rating)) if errors.is_empty() => {
            Ok(SurveySubmission {
                name,
                email,
                age,
                consent,
                rating,
                comments,
                user_agent,
                submission_id,
            })
        }
        _ => Err(errors),
    }
}

/// `null` counts as absent.
fn present<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    match obj.get(field) {
        None | Some(Value::Null) => None,
        Some(v) => Some(v),
    }
}

fn required_string(
    obj: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match present(obj, field) {
        None => {
            errors.push(FieldError::new(field, "field required"));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(field, "must be a string"));
            None
        }
    }
}

fn optional_string(
    obj: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match present(obj, field) {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(field, "must be a string"));
            None
        }
    }
}
