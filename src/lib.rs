// src/lib.rs
pub mod checks;
pub mod cli;
pub mod crawler;
pub mod engine;
pub mod html;
pub mod output;
pub mod session;
pub mod types;
pub mod utils;

pub use cli::Args;
pub use engine::ScanEngine;
pub use types::{Config, CrawlOutcome, Finding, ScanReport, WebScoutError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
