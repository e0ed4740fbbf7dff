use std::str::FromStr;

use anyhow::{Context, Result};

/// CLI configuration loaded from environment variables (and `.env` if present).
///
/// Every variable has a default; a set-but-unparseable value is an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rust_log: String,
    /// Pages analyzed per document.
    pub max_pages: usize,
    pub max_file_size_bytes: u64,
    /// Job-posting length cap, in characters.
    pub max_job_text_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rust_log: "info".to_string(),
            max_pages: 3,
            max_file_size_bytes: 10 * 1024 * 1024,
            max_job_text_chars: 50_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_pages: env_or("MAX_PAGES", defaults.max_pages)?,
            max_file_size_bytes: env_or("MAX_FILE_SIZE_BYTES", defaults.max_file_size_bytes)?,
            max_job_text_chars: env_or("MAX_JOB_TEXT_CHARS", defaults.max_job_text_chars)?,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_var(key, std::env::var(key).ok(), default)
}

fn parse_var<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{value}'")),
        None => Ok(default),
    }
}
