// src/output.rs
use crate::types::{OutputConfig, OutputFormat, ScanReport, WebScoutError};
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub struct OutputManager {
    config: OutputConfig,
}

impl OutputManager {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub async fn write_report(&self, report: &ScanReport) -> Result<(), WebScoutError> {
        if let Some(file_path) = &self.config.file {
            self.write_to_file(file_path, report).await
        } else {
            self.write_to_stdout(report).await
        }
    }

    async fn write_to_file(
        &self,
        file_path: &str,
        report: &ScanReport,
    ) -> Result<(), WebScoutError> {
        if let Some(parent) = Path::new(file_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                WebScoutError::OutputError(format!("Failed to create directory: {}", e))
            })?;
        }

        let mut file = File::create(file_path)
            .map_err(|e| WebScoutError::OutputError(format!("Failed to create file: {}", e)))?;

        self.write_output(&mut file, report)?;

        println!("Results written to: {}", file_path);
        Ok(())
    }

    async fn write_to_stdout(&self, report: &ScanReport) -> Result<(), WebScoutError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.write_output(&mut handle, report)?;
        Ok(())
    }

    fn write_output<W: Write>(
        &self,
        writer: &mut W,
        report: &ScanReport,
    ) -> Result<(), WebScoutError> {
        match self.config.format {
            OutputFormat::Text => self.write_text_output(writer, report),
            OutputFormat::Json => self.write_json_output(writer, report),
        }
    }

    fn write_text_output<W: Write>(
        &self,
        writer: &mut W,
        report: &ScanReport,
    ) -> Result<(), WebScoutError> {
        writeln!(writer, "\n[*] Target: {}", report.target)
            .map_err(|e| WebScoutError::OutputError(e.to_string()))?;
        writeln!(
            writer,
            "[*] Visited {} URLs ({} fetched, {} failed)",
            report.stats.urls_visited, report.stats.pages_fetched, report.stats.fetch_failures
        )
        .map_err(|e| WebScoutError::OutputError(e.to_string()))?;
        writeln!(writer, "[*] Duration: {:?}", report.stats.duration)
            .map_err(|e| WebScoutError::OutputError(e.to_string()))?;

        writeln!(writer, "\n[*] Discovered URLs:")
            .map_err(|e| WebScoutError::OutputError(e.to_string()))?;

        let failed: HashSet<&String> = report.crawl.failed.iter().collect();
        for url in &report.crawl.visited {
            if failed.contains(url) {
                writeln!(writer, "{} [fetch failed]", url)
                    .map_err(|e| WebScoutError::OutputError(e.to_string()))?;
            } else {
                writeln!(writer, "{}", url)
                    .map_err(|e| WebScoutError::OutputError(e.to_string()))?;
            }
        }

        for check in &report.checks {
            writeln!(
                writer,
                "\n[*] {}: {} findings",
                check.check,
                check.findings.len()
            )
            .map_err(|e| WebScoutError::OutputError(e.to_string()))?;

            for finding in &check.findings {
                match &finding.url {
                    Some(url) => writeln!(writer, "- {} ({})", url, finding.detail)
                        .map_err(|e| WebScoutError::OutputError(e.to_string()))?,
                    None => writeln!(writer, "- {}", finding.detail)
                        .map_err(|e| WebScoutError::OutputError(e.to_string()))?,
                }
            }
        }

        Ok(())
    }

    fn write_json_output<W: Write>(
        &self,
        writer: &mut W,
        report: &ScanReport,
    ) -> Result<(), WebScoutError> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| WebScoutError::OutputError(format!("Failed to serialize JSON: {}", e)))?;

        writeln!(writer, "{}", json).map_err(|e| WebScoutError::OutputError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CheckReport, CrawlOutcome, Finding, ScanStats};
    use std::time::Duration;

    fn sample_report() -> ScanReport {
        ScanReport {
            target: "http://example.com".to_string(),
            crawl: CrawlOutcome {
                visited: vec![
                    "http://example.com/".to_string(),
                    "http://example.com/about".to_string(),
                    "http://example.com/broken".to_string(),
                ],
                failed: vec!["http://example.com/broken".to_string()],
            },
            checks: vec![
                CheckReport {
                    check: "env-files".to_string(),
                    description: "Checks for exposed .env files at common locations".to_string(),
                    findings: vec![Finding::at(
                        "http://example.com/.env",
                        "Potential .env file",
                    )],
                },
                CheckReport {
                    check: "software-versions".to_string(),
                    description: "Identifies installed software versions from page source"
                        .to_string(),
                    findings: vec![Finding::note("No version information found.")],
                },
            ],
            stats: ScanStats {
                urls_visited: 3,
                pages_fetched: 2,
                fetch_failures: 1,
                total_findings: 2,
                duration: Duration::from_millis(1234),
            },
            timestamp: "2024-05-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_text_output() {
        let manager = OutputManager::new(OutputConfig::default());
        let mut buffer = Vec::new();
        manager.write_output(&mut buffer, &sample_report()).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("[*] Target: http://example.com"));
        assert!(text.contains("[*] Visited 3 URLs (2 fetched, 1 failed)"));
        assert!(text.contains("http://example.com/broken [fetch failed]"));
        assert!(text.contains("[*] env-files: 1 findings"));
        assert!(text.contains("- http://example.com/.env (Potential .env file)"));
        assert!(text.contains("- No version information found."));
    }

    #[test]
    fn test_json_output() {
        let config = OutputConfig {
            format: OutputFormat::Json,
            ..OutputConfig::default()
        };
        let manager = OutputManager::new(config);
        let mut buffer = Vec::new();
        manager.write_output(&mut buffer, &sample_report()).unwrap();

        let parsed: ScanReport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.target, "http://example.com");
        assert_eq!(parsed.crawl.visited.len(), 3);
        assert_eq!(parsed.checks.len(), 2);
        assert_eq!(parsed.stats.pages_fetched, 2);
    }

    #[tokio::test]
    async fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results").join("scan.txt");
        let config = OutputConfig {
            file: Some(path.to_string_lossy().to_string()),
            ..OutputConfig::default()
        };

        let manager = OutputManager::new(config);
        manager.write_report(&sample_report()).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("[*] Target: http://example.com"));
    }
}
