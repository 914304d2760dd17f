// src/checks/env_files.rs
use crate::checks::Check;
use crate::session::Session;
use crate::types::{Finding, WebScoutError};
use async_trait::async_trait;
use log::{debug, warn};
use url::Url;

const ENV_PATHS: &[&str] = &[".env", ".env.example", "config/.env", "application/.env"];

// Marker present in Laravel-style dotenv files.
const ENV_MARKER: &str = "APP_KEY";

/// Probes well-known dotenv locations for environment files the server
/// is willing to hand out.
#[derive(Debug, Clone)]
pub struct EnvFileCheck {
    name: String,
}

impl Default for EnvFileCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvFileCheck {
    pub fn new() -> Self {
        Self {
            name: "env-files".to_string(),
        }
    }
}

#[async_trait]
impl Check for EnvFileCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Checks for exposed .env files at common locations"
    }

    fn clone_check(&self) -> Box<dyn Check> {
        Box::new(self.clone())
    }

    async fn run(&self, target: &Url, session: &Session) -> Result<Vec<Finding>, WebScoutError> {
        let mut findings = Vec::new();

        for path in ENV_PATHS {
            let probe_url = match target.join(path) {
                Ok(url) => url,
                Err(e) => {
                    debug!("Skipping unjoinable path {}: {}", path, e);
                    continue;
                }
            };

            match session.fetch_page(&probe_url).await {
                Ok(page) if page.is_success() && page.body.contains(ENV_MARKER) => {
                    warn!("Potential .env file found at: {}", probe_url);
                    findings.push(Finding::at(
                        probe_url.as_str(),
                        format!("Potential .env file (contains {})", ENV_MARKER),
                    ));
                }
                Ok(page) if page.is_success() => {
                    debug!(
                        "Checked {}, but it doesn't look like a valid .env file",
                        probe_url
                    );
                }
                Ok(page) => {
                    debug!("Checked {}: HTTP {}", probe_url, page.status);
                }
                Err(e) => {
                    debug!("Error checking {}: {}", probe_url, e);
                }
            }
        }

        Ok(findings)
    }
}
