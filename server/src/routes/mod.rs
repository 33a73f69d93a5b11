//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portfolio is a single Leptos page. This module stitches the SSR page
//! shell, the compiled `/pkg` assets, static files from the site root and a
//! health probe under one Axum router.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::config::LeptosOptions;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Directories served for the site: `(site_root, pkg_dir)`.
fn asset_dirs(options: &LeptosOptions) -> (PathBuf, PathBuf) {
    let site_root = PathBuf::from(&*options.site_root);
    let pkg_dir = site_root.join(&*options.site_pkg_dir);
    (site_root, pkg_dir)
}

/// Full application router: SSR page + assets + health probe.
pub fn app(options: LeptosOptions) -> Router {
    let routes = generate_route_list(portfolio_client::app::App);
    let (site_root, pkg_dir) = asset_dirs(&options);
    tracing::debug!(site_root = %site_root.display(), pkg_dir = %pkg_dir.display(), "serving site assets");

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || portfolio_client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
