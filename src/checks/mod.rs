// src/checks/mod.rs
use crate::session::Session;
use crate::types::{Finding, WebScoutError};
use async_trait::async_trait;
use url::Url;

mod admin_panels;
mod env_files;
mod versions;

pub use admin_panels::AdminPanelCheck;
pub use env_files::EnvFileCheck;
pub use versions::VersionCheck;

/// A single reconnaissance check run against the scan target.
#[async_trait]
pub trait Check: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    async fn run(&self, target: &Url, session: &Session) -> Result<Vec<Finding>, WebScoutError>;
    fn clone_check(&self) -> Box<dyn Check>;
}

pub fn create_check(name: &str) -> Option<Box<dyn Check>> {
    match name.to_lowercase().as_str() {
        "env-files" => Some(Box::new(EnvFileCheck::new())),
        "admin-panels" => Some(Box::new(AdminPanelCheck::new())),
        "software-versions" => Some(Box::new(VersionCheck::new())),
        _ => None,
    }
}

/// All checks in their fixed reporting order.
pub fn all_checks() -> Vec<Box<dyn Check>> {
    vec!["env-files", "admin-panels", "software-versions"]
        .into_iter()
        .filter_map(|name| create_check(name))
        .collect()
}
