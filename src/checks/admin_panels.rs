// src/checks/admin_panels.rs
use crate::checks::Check;
use crate::session::Session;
use crate::types::{Finding, WebScoutError};
use async_trait::async_trait;
use log::{debug, warn};
use url::Url;

const ADMIN_PATHS: &[&str] = &["admin", "administrator", "login", "wp-admin", "panel"];

/// Probes well-known admin panel locations. A panel counts as present
/// when the server answers 200, or 403 (deployed but access-controlled).
#[derive(Debug, Clone)]
pub struct AdminPanelCheck {
    name: String,
}

impl Default for AdminPanelCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminPanelCheck {
    pub fn new() -> Self {
        Self {
            name: "admin-panels".to_string(),
        }
    }

    fn is_panel_status(status: reqwest::StatusCode) -> bool {
        status.as_u16() == 200 || status.as_u16() == 403
    }
}

#[async_trait]
impl Check for AdminPanelCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Checks for common admin panels"
    }

    fn clone_check(&self) -> Box<dyn Check> {
        Box::new(self.clone())
    }

    async fn run(&self, target: &Url, session: &Session) -> Result<Vec<Finding>, WebScoutError> {
        let mut findings = Vec::new();

        for path in ADMIN_PATHS {
            let probe_url = match target.join(path) {
                Ok(url) => url,
                Err(e) => {
                    debug!("Skipping unjoinable path {}: {}", path, e);
                    continue;
                }
            };

            match session.fetch_page(&probe_url).await {
                Ok(page) if Self::is_panel_status(page.status) => {
                    warn!("Potential admin panel found at: {}", probe_url);
                    findings.push(Finding::at(
                        probe_url.as_str(),
                        format!("Potential admin panel (HTTP {})", page.status.as_u16()),
                    ));
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
