use axum::http::{header, Method};
use axum::Router;
use routes::{category_router, questions_router, quiz_router};
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod deserializers;
pub mod error;
mod pagination;
mod routes;
pub mod telemetry;

pub fn app(pool: SqlitePool) -> Router {
    // Permissive CORS attached to every response, matching the public frontend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .merge(category_router(pool.clone()))
        .merge(questions_router(pool.clone()))
        .merge(quiz_router(pool))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
