use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::evidence::newsapi::{DEFAULT_NEWS_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::verify::StopwordSource;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// NewsAPI key. May be empty: the provider then rejects every request and
    /// verification degrades to "no evidence".
    pub news_api_key: String,
    /// NewsAPI endpoint (defaults to https://newsapi.org/v2/everything)
    pub news_api_url: String,
    /// Upper bound on a single evidence fetch
    pub fetch_timeout_secs: u64,
    pub db_path: String,
    /// Custom stopword list for keyword extraction (TRUTHFORT_STOPWORDS_PATH).
    /// Unset means the bundled English list.
    pub stopwords_path: Option<PathBuf>,
    pub bind: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            news_api_key: String::new(),
            news_api_url: DEFAULT_NEWS_API_URL.to_string(),
            fetch_timeout_secs: DEFAULT_TIMEOUT_SECS,
            db_path: "./users.db".to_string(),
            stopwords_path: None,
            bind: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; only malformed numbers are errors.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let fetch_timeout_secs = match env::var("TRUTHFORT_FETCH_TIMEOUT_SECS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("TRUTHFORT_FETCH_TIMEOUT_SECS is not a number: {v}"))?,
            Err(_) => defaults.fetch_timeout_secs,
        };

        let port = match env::var("TRUTHFORT_PORT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("TRUTHFORT_PORT is not a valid port: {v}"))?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            news_api_key: env::var("NEWS_API_KEY").unwrap_or_default(),
            news_api_url: env::var("TRUTHFORT_NEWS_API_URL").unwrap_or(defaults.news_api_url),
            fetch_timeout_secs,
            db_path: env::var("TRUTHFORT_DB_PATH").unwrap_or(defaults.db_path),
            stopwords_path: env::var("TRUTHFORT_STOPWORDS_PATH").ok().map(PathBuf::from),
            bind: env::var("TRUTHFORT_BIND").unwrap_or(defaults.bind),
            port,
        })
    }

    /// Check that the NewsAPI key is configured.
    pub fn require_news_api_key(&self) -> Result<()> {
        if self.news_api_key.is_empty() {
            anyhow::bail!(
                "NEWS_API_KEY not set. Add it to your .env file.\n\
                 Without it every claim comes back Inconclusive."
            );
        }
        Ok(())
    }

    /// Where the keyword extractor should load stopwords from.
    pub fn stopword_source(&self) -> StopwordSource {
        match &self.stopwords_path {
            Some(path) => StopwordSource::File(path.clone()),
            None => StopwordSource::Bundled,
        }
    }
}
