//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR routes come from `library_client::app::App`; the hydrate bundle
//! is served from the site root's `pkg` directory. The host exposes no API of
//! its own beyond a health probe.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Host-only routes that do not involve Leptos.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application router: SSR pages, static bundle, and health probe.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(library_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || library_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    base_routes()
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
