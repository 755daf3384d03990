//! Portfolio backend server binary.
//!
//! # Environment Variables
//!
//! - `PORT` — HTTP port (default: 5000)
//! - `HOST` — Bind interface (default: 0.0.0.0)
//! - `STATIC_DIR` — Directory of static site files to serve (optional)
//! - `CHAT_RESPONSES` — Custom chat reply table JSON file (optional)
//! - `RUST_LOG` — Tracing filter (default: "info")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! # or serving the static site too:
//! STATIC_DIR=./site cargo run --bin server
//! ```

use anyhow::anyhow;
use portfolio_api::chatbot::ResponseTable;
use portfolio_api::config::ServerConfig;
use portfolio_api::server::{app_router, app_router_with_static, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_api=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Build app state, with a custom reply table when one is configured
    let state = match &config.response_file {
        Some(path) => {
            let table = ResponseTable::from_file(path).map_err(|e| anyhow!(e))?;
            tracing::info!("loaded chat replies from {}", path);
            AppState::with_response_table(table)
        }
        None => AppState::new(),
    };

    let app = match &config.static_dir {
        Some(dir) if dir.is_dir() => {
            tracing::info!("serving static site from {}", dir.display());
            app_router_with_static(state, dir)
        }
        Some(dir) => {
            tracing::warn!("STATIC_DIR {} is not a directory, serving API only", dir.display());
            app_router(state)
        }
        None => app_router(state),
    };

    let bind_addr = config.bind_addr();
    tracing::info!("portfolio backend starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /api/health       — liveness probe");
    tracing::info!("  GET  /api/portfolio    — owner bio");
    tracing::info!("  GET  /api/projects     — project list");
    tracing::info!("  GET  /api/contact-info — contact details");
    tracing::info!("  POST /api/contact      — contact form intake");
    tracing::info!("  POST /api/chat         — chat assistant");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
