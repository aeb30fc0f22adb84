#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use stage::content::Catalogue;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() -> ExitCode {
    // Loaded before the subscriber so `.env` can set `RUST_LOG`.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    if let Some(problem) = config::dotenv_problem(&dotenv) {
        tracing::warn!(error = %problem, "failed to load .env");
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "folio exited");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), HostError> {
    let config = ServerConfig::from_env()?;
    let catalogue = Catalogue::builtin()?;
    tracing::info!(
        storytelling = catalogue.storytelling.projects.len(),
        uiux = catalogue.uiux.projects.len(),
        "showcase catalogue loaded"
    );

    let app = routes::app(routes::AppState::new(catalogue), &config)?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "folio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
