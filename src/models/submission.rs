use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A validated survey submission. Lives only for the duration of one request.
#[derive(Clone, PartialEq)]
pub struct SurveySubmission {
    pub name: String,
    pub email: String,
    pub age: Option<i64>,
    pub consent: bool,
    pub rating: Number,
    pub comments: Option<String>,
    pub user_agent: Option<String>,
    pub submission_id: Option<String>,
}

// Raw PII stays out of debug output.
impl std::fmt::Debug for SurveySubmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurveySubmission")
            .field("name", &self.name)
            .field("email", &"<redacted>")
            .field("age", &self.age.map(|_| "<redacted>"))
            .field("consent", &self.consent)
            .field("rating", &self.rating)
            .field("comments", &self.comments)
            .field("user_agent", &self.user_agent)
            .field("submission_id", &self.submission_id)
            .finish()
    }
}

/// One line of the append-only survey log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSurveyRecord {
    pub name: String,
    pub consent: bool,
    pub rating: Number,
    pub comments: Option<String>,
    pub user_agent: Option<String>,
    pub hashed_email: String,
    pub hashed_age: Option<String>,
    pub submission_id: String,
    pub received_at: DateTime<Utc>,
    pub ip: String,
}
