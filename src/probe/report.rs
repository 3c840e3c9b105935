//! Probe result types.
//!
//! Each probed tool produces a [`ToolReport`]; the set of reports for one
//! request folds into a [`ReadinessReport`]. All types are built fresh per
//! request and never cached.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

/// The outcome of probing a single tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// Tool detected through its primary strategy.
    Ok,

    /// Tool detected through a named fallback strategy.
    OkVia(String),

    /// Tool present but its version invocation reported failure.
    Error,

    /// Tool not found by any strategy.
    Missing,
}

impl ToolStatus {
    /// Whether this status counts toward overall readiness.
    pub fn is_ok(&self) -> bool {
        matches!(self, ToolStatus::Ok | ToolStatus::OkVia(_))
    }
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolStatus::Ok => f.write_str("ok"),
            ToolStatus::OkVia(strategy) => write!(f, "ok (via {strategy})"),
            ToolStatus::Error => f.write_str("error"),
            ToolStatus::Missing => f.write_str("missing"),
        }
    }
}

impl Serialize for ToolStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One tool's probe result: status plus best-effort path and version.
///
/// `path` and `version` may be empty (a package query can succeed without a
/// resolvable binary path); empty fields are omitted from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolReport {
    pub status: ToolStatus,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub path: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
}

impl ToolReport {
    /// Create a report with a resolved path and version string.
    pub fn new(status: ToolStatus, path: String, version: String) -> Self {
        Self {
            status,
            path,
            version,
        }
    }

    /// The report for a tool no strategy could find.
    pub fn missing() -> Self {
        Self {
            status: ToolStatus::Missing,
            path: String::new(),
            version: String::new(),
        }
    }
}

/// Aggregate readiness across all required tools.
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessReport {
    /// True iff every required tool's status counts as ok.
    pub ok: bool,

    /// Per-tool reports, keyed by tool name. BTreeMap keeps JSON key order
    /// stable across requests.
    pub dependencies: BTreeMap<String, ToolReport>,
}

impl ReadinessReport {
    /// Fold per-tool reports into an aggregate.
    pub fn from_reports(dependencies: BTreeMap<String, ToolReport>) -> Self {
        let ok = dependencies.values().all(|report| report.status.is_ok());
        Self { ok, dependencies }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_strings() {
        assert_eq!(ToolStatus::Ok.to_string(), "ok");
        assert_eq!(
            ToolStatus::OkVia("pdftoppm".into()).to_string(),
            "ok (via pdftoppm)"
        );
        assert_eq!(ToolStatus::Error.to_string(), "error");
        assert_eq!(ToolStatus::Missing.to_string(), "missing");
    }

    #[test]
    fn ok_and_ok_via_count_as_ok() {
        assert!(ToolStatus::Ok.is_ok());
        assert!(ToolStatus::OkVia("pdfinfo".into()).is_ok());
        assert!(!ToolStatus::Error.is_ok());
        assert!(!ToolStatus::Missing.is_ok());
    }

    #[test]
    fn missing_report_serializes_status_only() {
        let json = serde_json::to_value(ToolReport::missing()).unwrap();
        assert_eq!(json, serde_json::json!({"status": "missing"}));
    }

    #[test]
    fn full_report_serializes_all_fields() {
        let report = ToolReport::new(
            ToolStatus::Ok,
            "/usr/bin/tesseract".into(),
            "tesseract 5.3.0".into(),
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "ok",
                "path": "/usr/bin/tesseract",
                "version": "tesseract 5.3.0",
            })
        );
    }

    #[test]
    fn fallback_status_serializes_with_strategy_tag() {
        let report = ToolReport::new(
            ToolStatus::OkVia("pdftoppm".into()),
            "/usr/bin/pdftoppm".into(),
            "pdftoppm version 22.02.0".into(),
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "ok (via pdftoppm)");
    }

    #[test]
    fn readiness_true_when_all_ok() {
        let mut deps = BTreeMap::new();
        deps.insert(
            "tesseract".to_string(),
            ToolReport::new(ToolStatus::Ok, "/usr/bin/tesseract".into(), "5.3.0".into()),
        );
        deps.insert(
            "poppler".to_string(),
            ToolReport::new(
                ToolStatus::OkVia("pdfinfo".into()),
                "/usr/bin/pdfinfo".into(),
                "pdfinfo version 22.02.0".into(),
            ),
        );
        assert!(ReadinessReport::from_reports(deps).ok);
    }

    #[test]
    fn readiness_false_when_any_tool_not_ok() {
        for bad in [ToolStatus::Error, ToolStatus::Missing] {
            let mut deps = BTreeMap::new();
            deps.insert(
                "tesseract".to_string(),
                ToolReport::new(ToolStatus::Ok, "/usr/bin/tesseract".into(), "5.3.0".into()),
            );
            deps.insert(
                "poppler".to_string(),
                ToolReport::new(bad, String::new(), String::new()),
            );
            assert!(!ReadinessReport::from_reports(deps).ok);
        }
    }
}
