//! docready service entry point.

use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use docready::config::Config;
use docready::server;

/// Readiness probe server for external document-processing tools.
#[derive(Parser, Debug)]
#[command(name = "docready")]
#[command(about = "Reports whether tesseract and poppler are installed", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,

    /// Bind address override, e.g. 127.0.0.1:8000.
    #[arg(long)]
    bind: Option<String>,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("docready=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docready=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load .env file if it exists
    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
    }

    init_tracing(args.debug);

    let config = match &args.bind {
        Some(addr) => Config::from_bind_addr(addr)?,
        None => Config::from_env()?,
    };

    let app = server::router().layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "starting readiness server");
    axum::serve(listener, app).await?;

    Ok(())
}
