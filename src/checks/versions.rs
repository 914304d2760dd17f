// src/checks/versions.rs
use crate::checks::Check;
use crate::html;
use crate::session::Session;
use crate::types::{Finding, WebScoutError};
use async_trait::async_trait;
use log::{debug, error};
use regex::Regex;
use url::Url;

const WORDPRESS_HINT: &str = "wp-content";
const VERSION_FILE: &str = "wp-includes/version.php";

/// Pulls the version literal out of a WordPress version.php body,
/// e.g. `$wp_version = '6.1.1';` yields `6.1.1`.
fn extract_wp_version(body: &str) -> Result<Option<String>, WebScoutError> {
    let pattern = Regex::new(r#"wp_version\s*=\s*['"]?([^'";\s]+)"#)
        .map_err(|e| WebScoutError::ParseError(format!("version pattern: {}", e)))?;

    Ok(pattern.captures(body).map(|caps| caps[1].to_string()))
}

/// Scrapes the landing page for software version disclosures: generator
/// meta tags plus WordPress-specific hints.
#[derive(Debug, Clone)]
pub struct VersionCheck {
    name: String,
}

impl Default for VersionCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionCheck {
    pub fn new() -> Self {
        Self {
            name: "software-versions".to_string(),
        }
    }

    async fn fetch_wordpress_version(
        &self,
        target: &Url,
        session: &Session,
    ) -> Result<Option<String>, WebScoutError> {
        let version_url = match target.join(VERSION_FILE) {
            Ok(url) => url,
            Err(e) => {
                debug!("Skipping unjoinable path {}: {}", VERSION_FILE, e);
                return Ok(None);
            }
        };

        match session.fetch_page(&version_url).await {
            Ok(page) if page.is_success() => extract_wp_version(&page.body),
            Ok(_) | Err(_) => {
                debug!("{} not found or inaccessible", VERSION_FILE);
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl Check for VersionCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Identifies installed software versions from page source"
    }

    fn clone_check(&self) -> Box<dyn Check> {
        Box::new(self.clone())
    }

    async fn run(&self, target: &Url, session: &Session) -> Result<Vec<Finding>, WebScoutError> {
        let page = match session.fetch_page(target).await {
            Ok(page) if page.is_success() => page,
            Ok(page) => {
                error!("Error fetching {}: HTTP {}", target, page.status);
                return Ok(vec![Finding::note("Error fetching page.")]);
            }
            Err(e) => {
                error!("Error fetching or parsing the page: {}", e);
                return Ok(vec![Finding::note("Error fetching page.")]);
            }
        };

        let mut findings = Vec::new();

        for content in html::generator_meta_contents(&page.body) {
            findings.push(Finding::note(format!("Generator: {}", content)));
        }

        if page.body.contains(WORDPRESS_HINT) {
            findings.push(Finding::note("WordPress site detected"));

            if let Some(content) = html::generator_meta_exact(&page.body) {
                findings.push(Finding::note(format!(
                    "WordPress Generator tag: {}",
                    content
                )));
            }

            let version = self
                .fetch_wordpress_version(target, session)
                .await
                .map_err(|e| WebScoutError::CheckError {
                    check_name: self.name.clone(),
                    message: e.to_string(),
                })?;

            if let Some(version) = version {
                findings.push(Finding::note(format!(
                    "WordPress Version from {}: {}",
                    VERSION_FILE, version
                )));
            }
        }

        if findings.is_empty() {
            findings.push(Finding::note("No version information found."));
        }

        Ok(findings)
    }
}
