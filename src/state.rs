use std::sync::Arc;

use crate::clock::Clock;
use crate::config::Config;
use crate::storage::SurveyLog;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub log: SurveyLog,
    pub clock: Arc<dyn Clock>,
}
