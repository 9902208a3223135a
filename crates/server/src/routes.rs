pub mod persons;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::person::{PersonService, SeaOrmPersonRepository};

use crate::openapi::ApiDoc;

pub const FRONTEND_DIR: &str = "frontend";

#[derive(Clone)]
pub struct ServerState {
    pub persons: PersonService,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::from_service(PersonService::new(Arc::new(SeaOrmPersonRepository::new(db))))
    }

    pub fn from_service(persons: PersonService) -> Self {
        Self { persons }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: persons API, health, OpenAPI docs and
/// the static frontend as fallback.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    build_router_with_frontend(state, cors, FRONTEND_DIR)
}

/// Same as [`build_router`], serving static assets from `frontend_dir`.
/// Unknown paths get `index.html` so client-side routes resolve.
pub fn build_router_with_frontend(state: ServerState, cors: CorsLayer, frontend_dir: &str) -> Router {
    let static_dir = ServeDir::new(frontend_dir)
        .fallback(ServeFile::new(format!("{}/index.html", frontend_dir)));

    let api = Router::new()
        .route("/persons", get(persons::list).post(persons::create))
        .route("/persons/search", get(persons::search))
        .route(
            "/persons/:id",
            get(persons::get).put(persons::update).delete(persons::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(static_dir)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
