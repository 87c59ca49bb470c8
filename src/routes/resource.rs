//! Resource CRUD routes under `/api`. Paths are parameterized; handlers resolve
//! the resource from the first segment.

use crate::handlers::{create, delete as delete_handler, list, read, update, welcome};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/api", get(welcome))
        .route("/api/:path_segment", get(list).post(create))
        .route(
            "/api/:path_segment/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
