use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_path: PathBuf,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("SURVEY_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid SURVEY_HOST: {e}"))?;

        let port: u16 = env_or("SURVEY_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid SURVEY_PORT: {e}"))?;

        let log_path = PathBuf::from(env_or("SURVEY_LOG_PATH", "data/survey.ndjson"));
        if log_path.as_os_str().is_empty() {
            return Err("Invalid SURVEY_LOG_PATH: must not be empty".to_string());
        }

        let max_body_size: usize = env_or("SURVEY_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid SURVEY_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("SURVEY_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            log_path,
            max_body_size,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
