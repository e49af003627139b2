//! HTTP surface. Each handler takes the lock of exactly one store and performs one operation on it.
//!
//! Activity routes are in `activities`, todo routes in `todos`.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::http::{Method, header::CONTENT_TYPE};
use axum::middleware::from_fn;
use axum::response::Redirect;
use axum::routing::{delete, get, post, put};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;

use crate::database::Database;
use crate::middleware;

pub mod activities;
pub mod todos;

pub type AppState = Arc<Database>;

/// Builds the full application router over an already-seeded database
pub fn router(database: AppState, static_dir: &Path) -> Router {
    // Any origin may call the API; the landing page is often served from elsewhere in development
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(AllowOrigin::any());

    Router::new()
        .route("/", get(root))
        .route("/activities", get(activities::get_activities))
        .route(
            "/activities/{activity_name}/signup",
            post(activities::signup_for_activity),
        )
        .route(
            "/activities/{activity_name}/unregister",
            delete(activities::unregister_from_activity),
        )
        .route("/todos", get(todos::get_todos).post(todos::create_todo))
        .route(
            "/todos/{todo_id}",
            put(todos::update_todo).delete(todos::delete_todo),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(database)
        .layer(from_fn(middleware::log_request))
        .layer(cors)
}

/// Sends browsers to the landing page
pub async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}
