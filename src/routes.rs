//! Router assembly.
//!
//! The Leptos app owns `/`; the host adds a health probe, a read-only JSON
//! view of the showcase catalogue, and static asset serving for `/pkg` and
//! the public assets directory.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path as FsPath, PathBuf};
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use stage::content::{Catalogue, Showcase};
use stage::mode::Mode;
use stage::router::ContentView;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::HostError;

#[derive(Clone)]
pub struct AppState {
    pub catalogue: Arc<Catalogue>,
}

impl AppState {
    #[must_use]
    pub fn new(catalogue: Catalogue) -> Self {
        Self { catalogue: Arc::new(catalogue) }
    }
}

/// Host routes that do not go through Leptos.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/showcase/{mode}", get(showcase))
        .with_state(state)
}

/// Full application: API routes, Leptos SSR, and static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` section).
pub fn app(state: AppState, config: &ServerConfig) -> Result<Router, HostError> {
    let conf = get_configuration(None)
        .or_else(|_| get_configuration(Some("Cargo.toml")))
        .map_err(|e| HostError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(root) = &config.site_root {
        leptos_options.site_root = root.to_string_lossy().into_owned().into();
    }
    leptos_options.site_addr = config.socket_addr();

    let routes = generate_route_list(client::app::App);
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join(leptos_options.site_pkg_dir.as_ref())))
        .fallback_service(public_assets(&site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Sticker images and other public files are deployed next to `/pkg` in the site root.
fn public_assets(site_root: &FsPath) -> ServeDir {
    ServeDir::new(site_root)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /api/showcase/{mode}`: the projects and highlights for one track.
async fn showcase(State(state): State<AppState>, Path(mode): Path<String>) -> Result<Json<Showcase>, StatusCode> {
    let Ok(mode) = mode.parse::<Mode>() else {
        tracing::debug!(%mode, "showcase requested for unknown mode");
        return Err(StatusCode::NOT_FOUND);
    };
    let view = ContentView::for_mode(mode).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(state.catalogue.showcase(view).clone()))
}
