// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    handlers::{admin, pages, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * HTML pages at `/` and `/admin`, front-end assets under `/static`.
/// * Student API (`check_reg`, `get_questions`, `submit_attempt`).
/// * Admin API (question bank CRUD, marks). These routes carry no auth layer.
/// * Global middleware (Trace, CORS) and shared state (the three stores).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let admin_routes = Router::new()
        .route(
            "/questions",
            get(admin::list_questions)
                .post(admin::add_question)
                .delete(admin::delete_questions),
        )
        .route("/marks", get(admin::list_marks));

    let api_routes = Router::new()
        .route("/check_reg", post(quiz::check_reg))
        .route("/get_questions", get(quiz::get_questions))
        .route("/submit_attempt", post(quiz::submit_attempt))
        .nest("/admin", admin_routes);

    Router::new()
        .route("/", get(pages::index))
        .route("/admin", get(pages::admin_page))
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
