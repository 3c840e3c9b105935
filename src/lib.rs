//! docready - readiness probe service for external document-processing tools.
//!
//! docready exposes a small HTTP endpoint that reports whether the external
//! CLI tools a document pipeline depends on (the tesseract OCR engine and
//! the poppler PDF utilities) are installed and reachable, along with their
//! resolved paths and best-effort version strings.
//!
//! # Modules
//!
//! - [`config`] - Service configuration from environment and flags
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Strategy-driven tool detection and version parsing
//! - [`readiness`] - Aggregation of per-tool probes into one report
//! - [`server`] - Thin HTTP adapter over the readiness check
//!
//! # Example
//!
//! ```
//! use docready::probe::{SystemRunner, ToolProber};
//! use docready::readiness::check_readiness;
//!
//! // An empty PATH finds nothing: every tool reports missing.
//! let prober = ToolProber::new(SystemRunner, vec![]);
//! let report = check_readiness(&prober);
//! assert!(!report.ok);
//! ```

pub mod config;
pub mod error;
pub mod probe;
pub mod readiness;
pub mod server;

pub use error::{ReadyError, Result};
