//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server holds no user data. It renders the Leptos pages (onboarding at
//! `/`, dashboard at `/dashboard`), serves the hydrate bundle under `/pkg`,
//! and exposes a health probe.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;

/// Leptos SSR app plus static assets and probes.
///
/// # Errors
///
/// Returns an error if the Leptos options cannot be read from the
/// `LEPTOS_*` environment variables (cargo-leptos sets them from the
/// workspace `Cargo.toml` metadata).
pub fn app() -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    Ok(router(conf.leptos_options))
}

/// Assemble the router for already-loaded Leptos options.
pub fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .route("/dashboard.html", get(redirect_legacy_dashboard))
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    leptos_router
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Old static page name for the dashboard.
async fn redirect_legacy_dashboard() -> Redirect {
    Redirect::permanent("/dashboard")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Page not found.")
}
