//! Process execution seam and PATH lookup for tool probing.
//!
//! Probe strategies never touch `std::process` directly; they go through
//! [`ProcessRunner`] so tests can script command outputs without spawning
//! anything. [`SystemRunner`] is the real implementation.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Outcome of running a probe command.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Whether the command exited with code 0.
    pub success: bool,

    /// Combined stdout and stderr text, stdout first.
    ///
    /// Several of the probed tools print version info to stderr while
    /// exiting zero, or to stdout while exiting non-zero, so callers get
    /// both streams together and treat the exit code as informational.
    pub combined: String,
}

/// Runs external commands on behalf of probe strategies.
pub trait ProcessRunner {
    /// Run a program with arguments, capturing combined stdout+stderr.
    ///
    /// An `Err` means the process could not be spawned at all; a process
    /// that ran and failed is an `Ok` with `success == false`.
    fn run(&self, program: &Path, args: &[&str]) -> io::Result<RunOutput>;
}

/// Spawns real processes via `std::process::Command`.
///
/// Invocations are synchronous with no timeout: a hung binary blocks the
/// caller. The probed tools are assumed to answer version flags quickly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[&str]) -> io::Result<RunOutput> {
        let output = Command::new(program).args(args).output()?;
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(RunOutput {
            exit_code: output.status.code(),
            success: output.status.success(),
            combined,
        })
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a binary's path by iterating over PATH entries.
///
/// Returns the first candidate that exists and is executable. Does NOT
/// shell out to `which` — its behavior varies across systems and it is
/// sometimes a builtin with inconsistent error handling.
pub fn locate_binary(name: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(name);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}
