// src/types.rs
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub timeout: Duration,
    pub user_agent: String,
    pub max_depth: usize,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            user_agent: format!("webscout/{}", env!("CARGO_PKG_VERSION")),
            max_depth: 3,
            output: OutputConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub file: Option<String>,
    pub verbose: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            file: None,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One reconnaissance observation. Path probes set `url` to the probed
/// location; version findings are detail-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub url: Option<String>,
    pub detail: String,
}

impl Finding {
    pub fn at(url: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            detail: detail.into(),
        }
    }

    pub fn note(detail: impl Into<String>) -> Self {
        Self {
            url: None,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub check: String,
    pub description: String,
    pub findings: Vec<Finding>,
}

/// Crawl result: every URL dequeued and attempted (in breadth-first
/// discovery order) plus the subset whose fetch did not succeed. The
/// successfully fetched pages are `visited` minus `failed`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrawlOutcome {
    pub visited: Vec<String>,
    pub failed: Vec<String>,
}

impl CrawlOutcome {
    pub fn fetched_count(&self) -> usize {
        self.visited.len() - self.failed.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanStats {
    pub urls_visited: usize,
    pub pages_fetched: usize,
    pub fetch_failures: usize,
    pub total_findings: usize,
    pub duration: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub target: String,
    pub crawl: CrawlOutcome,
    pub checks: Vec<CheckReport>,
    pub stats: ScanStats,
    pub timestamp: String,
}

#[derive(Debug, Error)]
pub enum WebScoutError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid target URL: {0}")]
    InvalidTarget(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Check error in {check_name}: {message}")]
    CheckError {
        check_name: String,
        message: String,
    },

    #[error("Output error: {0}")]
    OutputError(String),
}
