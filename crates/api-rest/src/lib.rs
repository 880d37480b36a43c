//! # dsg-api-rest
//!
//! REST API for the discharge summary generator.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, error mapping)
//!
//! Business logic lives in `dsg-core`; this crate only translates between
//! HTTP and the [`DischargeService`].

#![warn(rust_2018_idioms)]

pub mod error;
pub mod handlers;

pub use error::{ApiError, ErrorBody};

use axum::routing::get;
use axum::Router;
use dsg_core::DischargeService;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DischargeService>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::create_discharge,
        handlers::list_discharges,
        handlers::get_discharge,
        handlers::download_pdf,
        handlers::download_docx,
    ),
    components(schemas(
        dsg_types::DischargeSummary,
        dsg_types::NewDischargeSummary,
        dsg_types::Gender,
        dsg_types::AdmissionUnit,
        dsg_types::DischargeCondition,
        error::ErrorBody,
        handlers::HealthRes,
    ))
)]
struct ApiDoc;

/// Builds the application router with Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/discharges",
            get(handlers::list_discharges).post(handlers::create_discharge),
        )
        .route("/api/discharges/:id", get(handlers::get_discharge))
        .route("/api/discharges/:id/pdf", get(handlers::download_pdf))
        .route("/api/discharges/:id/docx", get(handlers::download_docx))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
