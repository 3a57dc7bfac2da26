use crate::error::ConfigError;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
const DB_FILE_NAME: &str = "quiz_client.db";
const LOG_FILE_NAME: &str = "quiz_client.log";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub data_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Config {
    /// Reads `QUIZ_API_URL`, `QUIZ_DATA_DIR` and `QUIZ_LOG_FILE`, loading a `.env` file first
    /// when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = match non_empty(lookup("QUIZ_API_URL")) {
            Some(url) => validate_api_url(url)?,
            None => DEFAULT_API_URL.to_string(),
        };

        let data_dir = match non_empty(lookup("QUIZ_DATA_DIR")) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir(&lookup).ok_or(ConfigError::NoDataDir)?,
        };

        let log_file = non_empty(lookup("QUIZ_LOG_FILE"))
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(LOG_FILE_NAME));

        Ok(Self {
            api_url,
            data_dir,
            log_file,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_api_url(url: String) -> Result<String, ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.trim_end_matches('/').to_string())
    } else {
        Err(ConfigError::Invalid {
            name: "QUIZ_API_URL",
            reason: "must start with http:// or https://".to_string(),
        })
    }
}

fn default_data_dir<F>(lookup: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if cfg!(target_os = "windows") {
        let home = lookup("USERPROFILE")?;
        Some(PathBuf::from(home).join(".local\\share\\quiz-client"))
    } else {
        let home = lookup("HOME")?;
        Some(PathBuf::from(home).join(".local/share/quiz-client"))
    }
}
