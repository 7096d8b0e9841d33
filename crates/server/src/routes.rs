use axum::{
    http::{header, Method},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use models::{assignment, booking, feedback, project, research_paper, video};

use crate::state::ServerState;

pub mod resources;

pub const WELCOME: &str = "Welcome to Drippy Minds Backend!";

pub async fn welcome() -> &'static str {
    WELCOME
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Any origin, `Content-Type` allowed.
pub fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::HEAD])
        .allow_headers([header::CONTENT_TYPE])
}

/// Build the full application router: welcome, health and the resource API.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(welcome))
        .route("/health", get(health));

    let api = Router::new()
        .route(
            "/api/assignments",
            get(resources::list::<assignment::Entity>).post(resources::create::<assignment::Entity>),
        )
        .route(
            "/api/projects",
            get(resources::list::<project::Entity>).post(resources::create::<project::Entity>),
        )
        .route(
            "/api/research-papers",
            get(resources::list::<research_paper::Entity>).post(resources::create::<research_paper::Entity>),
        )
        .route(
            "/api/videos",
            get(resources::list::<video::Entity>).post(resources::create::<video::Entity>),
        )
        // write-only
        .route("/api/feedback", post(resources::create::<feedback::Entity>))
        .route(
            "/api/bookings",
            get(resources::list::<booking::Entity>).post(resources::create::<booking::Entity>),
        );

    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request with method and path, INFO level
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
