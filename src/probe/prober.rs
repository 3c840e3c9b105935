//! Ordered strategy evaluation for a single tool.

use std::path::PathBuf;

use super::report::ToolReport;
use super::runner::{parse_system_path, ProcessRunner, SystemRunner};
use super::strategy::ProbeStrategy;

/// Probes tools by trying an ordered list of strategies.
///
/// The runner and PATH entries are injected so tests can probe against
/// scripted processes and temp-dir PATHs. Every probe reads live state;
/// nothing is cached between calls.
#[derive(Debug)]
pub struct ToolProber<R: ProcessRunner> {
    runner: R,
    path_entries: Vec<PathBuf>,
}

impl ToolProber<SystemRunner> {
    /// A prober over the live system PATH, spawning real processes.
    pub fn system() -> Self {
        Self::new(SystemRunner, parse_system_path())
    }
}

impl<R: ProcessRunner> ToolProber<R> {
    /// Create a prober with an explicit runner and PATH entries.
    pub fn new(runner: R, path_entries: Vec<PathBuf>) -> Self {
        Self {
            runner,
            path_entries,
        }
    }

    /// Probe one tool, trying strategies in order until one yields a report.
    ///
    /// The first strategy to produce a result short-circuits the rest. When
    /// every strategy falls through the tool is reported `missing`, a
    /// normal outcome rather than a propagated failure.
    pub fn probe(&self, tool: &str, strategies: &[ProbeStrategy]) -> ToolReport {
        for strategy in strategies {
            if let Some(report) = strategy.attempt(&self.runner, &self.path_entries) {
                tracing::debug!(
                    tool,
                    strategy = strategy.name(),
                    status = %report.status,
                    "strategy yielded a report"
                );
                return report;
            }
        }
        tracing::debug!(tool, "no strategy yielded a report");
        ToolReport::missing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::report::ToolStatus;
    use crate::probe::runner::fake::{create_fake_binary, FakeRunner};
    use tempfile::TempDir;

    #[test]
    fn no_strategies_means_missing() {
        let prober = ToolProber::new(FakeRunner::new(), vec![]);
        let report = prober.probe("tesseract", &[]);
        assert_eq!(report, ToolReport::missing());
    }

    #[test]
    fn all_strategies_falling_through_means_missing() {
        let temp = TempDir::new().unwrap();
        let prober = ToolProber::new(FakeRunner::new(), vec![temp.path().to_path_buf()]);

        let report = prober.probe(
            "poppler",
            &[
                ProbeStrategy::package_query("poppler-utils", &[]),
                ProbeStrategy::version_flag("pdftoppm", "-v").as_fallback(),
                ProbeStrategy::version_flag("pdfinfo", "-v").as_fallback(),
            ],
        );

        assert_eq!(report.status, ToolStatus::Missing);
        assert_eq!(report.path, "");
        assert_eq!(report.version, "");
    }

    #[test]
    fn first_successful_strategy_wins() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("dpkg-query"));
        create_fake_binary(&temp.path().join("pdftoppm"));
        let runner = FakeRunner::new()
            .script("dpkg-query", 0, "22.02.0-2\n")
            .script("pdftoppm", 0, "pdftoppm version 22.02.0\n");
        let prober = ToolProber::new(runner, vec![temp.path().to_path_buf()]);

        let report = prober.probe(
            "poppler",
            &[
                ProbeStrategy::package_query("poppler-utils", &["pdfinfo", "pdftoppm"]),
                ProbeStrategy::version_flag("pdftoppm", "-v").as_fallback(),
            ],
        );

        // Both strategies would succeed; the package query is first.
        assert_eq!(report.status, ToolStatus::Ok);
        assert_eq!(report.version, "poppler-utils 22.02.0-2");
    }

    #[test]
    fn later_strategy_runs_when_earlier_falls_through() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("pdftoppm"));
        let runner = FakeRunner::new().script("pdftoppm", 0, "pdftoppm version 22.02.0\n");
        let prober = ToolProber::new(runner, vec![temp.path().to_path_buf()]);

        let report = prober.probe(
            "poppler",
            &[
                ProbeStrategy::package_query("poppler-utils", &[]),
                ProbeStrategy::version_flag("pdftoppm", "-v").as_fallback(),
            ],
        );

        assert_eq!(report.status, ToolStatus::OkVia("pdftoppm".to_string()));
        assert_eq!(report.version, "pdftoppm version 22.02.0");
    }
}
