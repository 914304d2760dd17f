// src/engine.rs
use crate::checks::{all_checks, Check};
use crate::cli::Args;
use crate::crawler::Crawler;
use crate::output::OutputManager;
use crate::session::Session;
use crate::types::{CheckReport, Config, OutputFormat, ScanReport, ScanStats, WebScoutError};
use crate::utils;
use futures::stream::{FuturesUnordered, StreamExt};
use log::{error, info};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use url::Url;

pub struct ScanEngine {
    config: Config,
    session: Session,
    checks: Vec<Box<dyn Check>>,
    output_manager: OutputManager,
}

impl ScanEngine {
    pub fn new(args: &Args) -> Result<Self, WebScoutError> {
        let mut config = Config {
            max_depth: args.crawl_depth,
            timeout: Duration::from_secs(args.timeout),
            ..Config::default()
        };

        // Override output settings with command line arguments
        if let Some(output_file) = args.output_file.clone() {
            config.output.file = Some(output_file);
        }
        if args.verbose {
            config.output.verbose = true;
        }
        if args.json {
            config.output.format = OutputFormat::Json;
        }

        let session = Session::new(&config)?;
        let checks = all_checks();
        let output_manager = OutputManager::new(config.output.clone());

        Ok(Self {
            config,
            session,
            checks,
            output_manager,
        })
    }

    /// Scan a target and write the report to the configured destination.
    pub async fn run(&self, target: &str) -> Result<ScanStats, WebScoutError> {
        let report = match self.scan(target).await {
            Ok(report) => report,
            Err(e) => {
                error!("Failed to scan {}: {}", target, e);
                if self.config.output.verbose {
                    eprintln!("Error details: {:?}", e);
                }
                return Err(e);
            }
        };

        self.output_manager.write_report(&report).await?;

        info!(
            "Completed scan for {}: {} pages fetched, {} findings",
            report.target, report.stats.pages_fetched, report.stats.total_findings
        );

        Ok(report.stats.clone())
    }

    /// Crawl the target and run every registered check against it.
    ///
    /// Only target validation can fail here. An unreachable target still
    /// produces a report: the crawl records the seed as failed and the
    /// checks come back empty-handed.
    pub async fn scan(&self, target: &str) -> Result<ScanReport, WebScoutError> {
        let target_url = utils::normalize_target(target)?;

        info!("Starting scan on: {}", target_url);
        let start_time = Instant::now();

        let crawler = Crawler::new(self.session.clone(), self.config.max_depth);
        let crawl = crawler.crawl(&target_url).await;
        info!(
            "Found {} URLs during crawling ({} fetched)",
            crawl.visited.len(),
            crawl.fetched_count()
        );

        let checks = self.run_checks(&target_url).await;

        let total_findings = checks.iter().map(|report| report.findings.len()).sum();
        let stats = ScanStats {
            urls_visited: crawl.visited.len(),
            pages_fetched: crawl.fetched_count(),
            fetch_failures: crawl.failed.len(),
            total_findings,
            duration: start_time.elapsed(),
        };

        Ok(ScanReport {
            target: target_url.as_str().to_string(),
            crawl,
            checks,
            stats,
            timestamp: chrono::Utc::now().to_rfc3339(),
        })
    }

    async fn run_checks(&self, target: &Url) -> Vec<CheckReport> {
        let mut futures = FuturesUnordered::new();

        // Create a task for each check
        for check in &self.checks {
            let check_name = check.name().to_string();
            let description = check.description().to_string();
            let target = target.clone();
            let session = self.session.clone();
            let check = check.clone_check();

            futures.push(async move {
                let start = Instant::now();
                let result = check.run(&target, &session).await;
                let duration = start.elapsed();

                match &result {
                    Ok(findings) => {
                        info!(
                            "{}: {} findings for {} in {:?}",
                            check_name,
                            findings.len(),
                            target,
                            duration
                        );
                    }
                    Err(e) => {
                        error!("{}: failed for {}: {}", check_name, target, e);
                    }
                }

                (check_name, description, result)
            });
        }

        let mut completed: HashMap<String, CheckReport> = HashMap::new();
        while let Some((name, description, result)) = futures.next().await {
            let findings = result.unwrap_or_default();
            completed.insert(
                name.clone(),
                CheckReport {
                    check: name,
                    description,
                    findings,
                },
            );
        }

        // Report in registry order regardless of completion order
        self.checks
            .iter()
            .filter_map(|check| completed.remove(check.name()))
            .collect()
    }
}
