mod common;
mod resource;

pub use common::common_routes;
pub use resource::resource_routes;

use crate::state::AppState;
use axum::Router;
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Full application: common + resource routes, static files from `static_dir`
/// for everything else, permissive CORS and request tracing.
pub fn app(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .merge(common_routes(state.clone()))
        .merge(resource_routes(state));
    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
}
