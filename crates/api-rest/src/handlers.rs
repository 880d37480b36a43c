//! HTTP handlers for the discharge summary API.

use crate::error::{ApiError, ErrorBody};
use crate::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use dsg_types::{DischargeSummary, NewDischargeSummary};
use serde::Serialize;
use utoipa::ToSchema;

const NOT_FOUND_MESSAGE: &str = "Summary not found";
const PDF_CONTENT_TYPE: &str = "application/pdf";
const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Liveness response body.
#[derive(Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
pub async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "dsg is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/api/discharges",
    request_body = NewDischargeSummary,
    responses(
        (status = 201, description = "Discharge summary generated and saved", body = DischargeSummary),
        (status = 400, description = "Validation failure naming the first failing field", body = ErrorBody),
        (status = 500, description = "Generation or persistence failure", body = ErrorBody)
    )
)]
/// Creates a discharge summary: validates the body, generates the narrative
/// through the completion provider, then persists the record. A record is
/// only ever inserted with its generated text already attached.
pub async fn create_discharge(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<DischargeSummary>), ApiError> {
    // Manual deserialization so the error can carry the dotted path of the
    // first failing input rather than an opaque rejection.
    let mut deserializer = serde_json::Deserializer::from_slice(&body);
    let raw: NewDischargeSummary =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
            ApiError::Validation {
                field: err.path().to_string(),
                message: err.inner().to_string(),
            }
        })?;
    let input = raw.validate()?;
    let summary = state.service.create(input).await?;
    Ok((StatusCode::CREATED, Json(summary)))
}

#[utoipa::path(
    get,
    path = "/api/discharges",
    responses(
        (status = 200, description = "All discharge summaries, newest first", body = [DischargeSummary])
    )
)]
pub async fn list_discharges(
    State(state): State<AppState>,
) -> Result<Json<Vec<DischargeSummary>>, ApiError> {
    Ok(Json(state.service.list_all()?))
}

#[utoipa::path(
    get,
    path = "/api/discharges/{id}",
    params(("id" = u64, Path, description = "Discharge summary id")),
    responses(
        (status = 200, description = "One discharge summary", body = DischargeSummary),
        (status = 404, description = "Unknown id", body = ErrorBody)
    )
)]
pub async fn get_discharge(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DischargeSummary>, ApiError> {
    let summary = state
        .service
        .get(id)?
        .ok_or(ApiError::NotFound(NOT_FOUND_MESSAGE))?;
    Ok(Json(summary))
}

#[utoipa::path(
    get,
    path = "/api/discharges/{id}/pdf",
    params(("id" = u64, Path, description = "Discharge summary id")),
    responses(
        (status = 200, description = "PDF document", content_type = "application/pdf"),
        (status = 404, description = "Unknown id", body = ErrorBody)
    )
)]
pub async fn download_pdf(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Response, ApiError> {
    let summary = state
        .service
        .get(id)?
        .ok_or(ApiError::NotFound(NOT_FOUND_MESSAGE))?;
    let bytes = dsg_export::render_pdf(&summary)?;
    Ok(attachment(PDF_CONTENT_TYPE, dsg_export::pdf_filename(&summary), bytes))
}

#[utoipa::path(
    get,
    path = "/api/discharges/{id}/docx",
    params(("id" = u64, Path, description = "Discharge summary id")),
    responses(
        (status = 200, description = "Word-compatible document",
         content_type = "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        (status = 404, description = "Unknown id", body = ErrorBody)
    )
)]
pub async fn download_docx(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Response, ApiError> {
    let summary = state
        .service
        .get(id)?
        .ok_or(ApiError::NotFound(NOT_FOUND_MESSAGE))?;
    let bytes = dsg_export::render_docx(&summary)?;
    Ok(attachment(DOCX_CONTENT_TYPE, dsg_export::docx_filename(&summary), bytes))
}

fn attachment(content_type: &'static str, filename: String, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", filename),
            ),
        ],
        bytes,
    )
        .into_response()
}
