//! Readiness aggregation across the required external tools.
//!
//! The document pipeline needs the tesseract OCR engine and the poppler PDF
//! utilities. Each gets its own strategy list; probes run sequentially and
//! independently, so one tool's outcome never affects another's.

use std::collections::BTreeMap;

use crate::probe::{ProbeStrategy, ProcessRunner, ReadinessReport, ToolProber};

/// The tesseract strategy: a single `--version` invocation.
///
/// Conclusive because tesseract on PATH is decisive: a failing version
/// invocation means a broken install (status `error`), not an undetected
/// tool.
fn tesseract_strategies() -> Vec<ProbeStrategy> {
    vec![ProbeStrategy::version_flag("tesseract", "--version").conclusive()]
}

/// The poppler strategy chain, most reliable source first.
fn poppler_strategies() -> Vec<ProbeStrategy> {
    vec![
        ProbeStrategy::package_query("poppler-utils", &["pdfinfo", "pdftoppm"]),
        // Per-binary -v invocations are heuristic fallbacks. Long-form
        // --version is avoided: some poppler builds treat it as a filename.
        ProbeStrategy::version_flag("pdftoppm", "-v").as_fallback(),
        ProbeStrategy::version_flag("pdfinfo", "-v").as_fallback(),
    ]
}

/// Probe every required tool and fold the results into one report.
///
/// `ok` is true iff every tool's status counts as ok. Results reflect live
/// system state (PATH, installed packages) at call time.
pub fn check_readiness<R: ProcessRunner>(prober: &ToolProber<R>) -> ReadinessReport {
    let mut dependencies = BTreeMap::new();
    dependencies.insert(
        "tesseract".to_string(),
        prober.probe("tesseract", &tesseract_strategies()),
    );
    dependencies.insert(
        "poppler".to_string(),
        prober.probe("poppler", &poppler_strategies()),
    );
    ReadinessReport::from_reports(dependencies)
}
