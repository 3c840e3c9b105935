//! Thin HTTP adapter over the readiness check.
//!
//! The handlers hold no probing logic of their own: `GET /` builds a fresh
//! prober over the live system PATH, delegates to
//! [`check_readiness`](crate::readiness::check_readiness), and attaches the
//! fixed greeting. Every response is `200 OK`; callers inspect `ok` and the
//! per-tool `status` fields rather than the HTTP status code.

use std::collections::BTreeMap;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::probe::{ReadinessReport, ToolProber, ToolReport};
use crate::readiness::check_readiness;

/// Fixed greeting echoed in every readiness response.
const DETAILS: &str = "Hello World";

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    details: &'static str,
    ok: bool,
    dependencies: BTreeMap<String, ToolReport>,
}

/// Readiness report endpoint.
///
/// Probes run synchronously (a handful of fast process spawns), so they are
/// moved off the async workers onto the blocking pool.
async fn index() -> Json<IndexResponse> {
    let report = tokio::task::spawn_blocking(|| {
        let prober = ToolProber::system();
        check_readiness(&prober)
    })
    .await
    .unwrap_or_else(|err| {
        tracing::error!(%err, "readiness probe task panicked");
        ReadinessReport {
            ok: false,
            dependencies: BTreeMap::new(),
        }
    });

    Json(IndexResponse {
        details: DETAILS,
        ok: report.ok,
        dependencies: report.dependencies,
    })
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Liveness endpoint: service identity without probing anything.
///
/// Use this for load balancer liveness probes; `GET /` is the readiness
/// probe.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the service router.
///
/// # Routes
///
/// - `GET /` - Readiness report for the external document tools
/// - `GET /health` - Service liveness, no probing
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}
