//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the gateway proxy routes and Leptos SSR rendering
//! under a single Axum router. Compiled client assets are served from the
//! site root's `/pkg` directory; any other path is rendered by the Leptos
//! app, whose router shows "Page not found." for unknown routes.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::extract::State;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Gateway-backed routes: everything under `/auth` and `/api`, plus health.
pub fn proxy_routes(state: AppState) -> Router {
    Router::new()
        .route("/auth/{*rest}", any(proxy::forward))
        .route("/api/{*rest}", any(proxy::forward))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application: proxy routes + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[workspace.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(shipping_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shipping_client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shipping_client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(proxy_routes(state)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok", "gateway": state.config.gateway_url }))
}
