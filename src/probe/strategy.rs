//! Probe strategies for detecting an external tool.
//!
//! Each strategy is one self-contained detection method. The prober tries
//! them in priority order and the first one to yield a report wins. A
//! strategy that yields nothing is not a failure — it falls through to the
//! next one, and a tool no strategy can find reports `missing`.

use std::path::PathBuf;

use regex::Regex;

use super::report::{ToolReport, ToolStatus};
use super::runner::{locate_binary, ProcessRunner};

/// Output marker that disqualifies a raw line from being taken as a version.
///
/// Some poppler builds mis-parse a flag as an input filename and print an
/// `I/O Error: ...` line while still exiting zero; that line is not a
/// version. Kept as a literal substring check; no other failure message has
/// shown up in practice.
pub const IO_ERROR_MARKER: &str = "I/O Error";

/// One method of detecting a tool's presence and version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStrategy {
    /// Query the host package database (dpkg) for an installed package.
    ///
    /// The package version is the most reliable source when present, so
    /// this is always a primary strategy. Yields nothing on hosts without
    /// dpkg.
    PackageQuery {
        /// Package name to query, e.g. `poppler-utils`.
        package: String,

        /// Binaries to resolve for the report's path field. Best-effort:
        /// the report is still ok with an empty path when none resolve.
        path_hints: Vec<String>,
    },

    /// Invoke a binary with a version flag and parse the first output line.
    VersionFlag {
        /// Executable name resolved against the PATH entries.
        binary: String,

        /// Version flag to pass, e.g. `--version` or `-v`.
        flag: String,

        /// When set, success is reported as `ok (via <binary>)` instead of
        /// plain `ok`.
        fallback: bool,

        /// When set, resolving the binary is conclusive: the invocation
        /// always yields a report, with a failed run becoming status
        /// `error` instead of falling through to the next strategy.
        conclusive: bool,
    },
}

impl ProbeStrategy {
    /// Create a package-query strategy.
    pub fn package_query(package: &str, path_hints: &[&str]) -> Self {
        ProbeStrategy::PackageQuery {
            package: package.to_string(),
            path_hints: path_hints.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create a primary version-flag strategy.
    pub fn version_flag(binary: &str, flag: &str) -> Self {
        ProbeStrategy::VersionFlag {
            binary: binary.to_string(),
            flag: flag.to_string(),
            fallback: false,
            conclusive: false,
        }
    }

    /// Label this strategy's successes with its name.
    pub fn as_fallback(mut self) -> Self {
        if let ProbeStrategy::VersionFlag { fallback, .. } = &mut self {
            *fallback = true;
        }
        self
    }

    /// Make a resolved binary conclusive for this strategy.
    pub fn conclusive(mut self) -> Self {
        if let ProbeStrategy::VersionFlag { conclusive, .. } = &mut self {
            *conclusive = true;
        }
        self
    }

    /// The name of this strategy, for logging.
    pub fn name(&self) -> &str {
        match self {
            ProbeStrategy::PackageQuery { package, .. } => package,
            ProbeStrategy::VersionFlag { binary, .. } => binary,
        }
    }

    /// Attempt this strategy. `None` means "no result — try the next one".
    pub fn attempt<R: ProcessRunner>(
        &self,
        runner: &R,
        path_entries: &[PathBuf],
    ) -> Option<ToolReport> {
        match self {
            ProbeStrategy::PackageQuery {
                package,
                path_hints,
            } => attempt_package_query(runner, path_entries, package, path_hints),
            ProbeStrategy::VersionFlag {
                binary,
                flag,
                fallback,
                conclusive,
            } => attempt_version_flag(runner, path_entries, binary, flag, *fallback, *conclusive),
        }
    }
}

fn attempt_package_query<R: ProcessRunner>(
    runner: &R,
    path_entries: &[PathBuf],
    package: &str,
    path_hints: &[String],
) -> Option<ToolReport> {
    let dpkg = locate_binary("dpkg-query", path_entries)?;
    let output = runner
        .run(&dpkg, &["-W", "-f=${Version}\n", package])
        .ok()?;
    if !output.success {
        return None;
    }

    let version = first_nonempty_line(&output.combined);
    if version.is_empty() {
        return None;
    }

    // Surface a binary path if one of the hinted executables resolves.
    let path = path_hints
        .iter()
        .find_map(|hint| locate_binary(hint, path_entries))
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    tracing::debug!(package, %version, "package query succeeded");
    Some(ToolReport::new(
        ToolStatus::Ok,
        path,
        format!("{package} {version}"),
    ))
}

fn attempt_version_flag<R: ProcessRunner>(
    runner: &R,
    path_entries: &[PathBuf],
    binary: &str,
    flag: &str,
    fallback: bool,
    conclusive: bool,
) -> Option<ToolReport> {
    let resolved = locate_binary(binary, path_entries)?;
    let path = resolved.display().to_string();

    // A spawn failure on a resolved binary counts as a failed invocation.
    let (success, combined) = match runner.run(&resolved, &[flag]) {
        Ok(output) => {
            tracing::debug!(binary, flag, exit_code = ?output.exit_code, "version invocation ran");
            (output.success, output.combined)
        }
        Err(err) => {
            tracing::debug!(binary, flag, %err, "version invocation failed to spawn");
            (false, String::new())
        }
    };
    let line = first_nonempty_line(&combined);

    let ok_status = || {
        if fallback {
            ToolStatus::OkVia(binary.to_string())
        } else {
            ToolStatus::Ok
        }
    };

    if conclusive {
        // The binary exists, so absence is off the table: report ok or
        // error by exit status and take the first output line as-is.
        let status = if success { ok_status() } else { ToolStatus::Error };
        let version = if line.is_empty() {
            "unknown".to_string()
        } else {
            line
        };
        return Some(ToolReport::new(status, path, version));
    }

    if let Some(version) = extract_version(binary, &line) {
        tracing::debug!(binary, %version, "strict version match");
        return Some(ToolReport::new(ok_status(), path, version));
    }

    // No strict match: accept the raw line when the run looked healthy.
    if success && !line.is_empty() && !line.contains(IO_ERROR_MARKER) {
        tracing::debug!(binary, line = %line, "accepting raw version line");
        return Some(ToolReport::new(ok_status(), path, line));
    }

    None
}

/// Strict version extraction: `<binary> version <token>`, case-insensitive,
/// where the token is a run of digits/letters/dots/dashes/plus-signs
/// starting with a digit. Returns the whole matched substring verbatim.
fn extract_version(binary: &str, line: &str) -> Option<String> {
    let pattern = format!(
        r"(?i){}\s+version\s+[0-9][0-9A-Za-z.+-]*",
        regex::escape(binary)
    );
    let re = Regex::new(&pattern).ok()?;
    re.find(line).map(|m| m.as_str().to_string())
}

/// First non-empty line of captured output, trimmed.
fn first_nonempty_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string()
}
