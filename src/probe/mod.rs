//! Strategy-driven detection of external CLI tools.
//!
//! This module answers one question per tool: is a usable executable
//! installed, and what version does it report? Version reporting across the
//! probed tools is not standardized. Some print to stderr, some exit
//! non-zero while still printing a version, and some mis-handle long-form
//! flags, so detection runs an ordered list of strategies and takes the
//! first one that yields a result.
//!
//! # Modules
//!
//! - [`prober`] - Ordered strategy evaluation per tool
//! - [`report`] - Status and report types returned by probes
//! - [`runner`] - Process execution seam and PATH lookup
//! - [`strategy`] - The individual probe strategies

pub mod prober;
pub mod report;
pub mod runner;
pub mod strategy;

pub use prober::ToolProber;
pub use report::{ReadinessReport, ToolReport, ToolStatus};
pub use runner::{ProcessRunner, RunOutput, SystemRunner};
pub use strategy::ProbeStrategy;
