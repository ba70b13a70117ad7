use chrono::{DateTime, Utc};

use crate::crypto::sha256_hex;
use crate::models::{StoredSurveyRecord, SurveySubmission};

/// Trim and lowercase an email before it is hashed or bucketed.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Coarse dedup window: the UTC hour of `at`, formatted `YYYYMMDDHH`.
///
/// UTC is the same reference as `received_at`, so the window never repeats or
/// skips across DST changes and does not depend on the host timezone.
pub fn hour_bucket(at: DateTime<Utc>) -> String {
    at.format("%Y%m%d%H").to_string()
}

/// A non-empty client-supplied id is used verbatim; otherwise the id is
/// derived from the normalized email and the hour bucket.
pub fn derive_submission_id(
    client_id: Option<&str>,
    normalized_email: &str,
    at: DateTime<Utc>,
) -> String {
    match client_id {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => sha256_hex(&format!("{normalized_email}{}", hour_bucket(at))),
    }
}

/// Build the storable record. Raw email and age are consumed here and only
/// their digests survive.
pub fn build(submission: SurveySubmission, received_at: DateTime<Utc>, ip: String) -> StoredSurveyRecord {
    let email = normalize_email(&submission.email);
    let submission_id = derive_submission_id(submission.submission_id.as_deref(), &email, received_at);

    StoredSurveyRecord {
        name: submission.name,
        consent: submission.consent,
        rating: submission.rating,
        comments: submission.comments,
        user_agent: submission.user_agent,
        hashed_email: sha256_hex(&email),
        hashed_age: submission.age.map(|age| sha256_hex(&age.to_string())),
        submission_id,
        received_at,
        ip,
    }
}
