//! API error taxonomy and HTTP mapping.
//!
//! Validation failures carry the first failing field back to the client;
//! everything unexpected is logged server-side and returned as a generic
//! message with no internal detail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use dsg_core::DischargeError;
use dsg_export::ExportError;
use dsg_types::FieldError;
use serde::Serialize;
use utoipa::ToSchema;

/// JSON error body returned for every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug)]
pub enum ApiError {
    /// Client input failed the shared schema; names the first failing
    /// field by its dotted wire path.
    Validation { field: String, message: String },
    /// Unknown record id. An expected navigational outcome, not a fault.
    NotFound(&'static str),
    Core(DischargeError),
    Export(ExportError),
}

impl From<FieldError> for ApiError {
    fn from(err: FieldError) -> Self {
        ApiError::Validation {
            field: err.field.to_owned(),
            message: err.message,
        }
    }
}

impl From<DischargeError> for ApiError {
    fn from(err: DischargeError) -> Self {
        ApiError::Core(err)
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::Export(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    message,
                    field: Some(field),
                }),
            )
                .into_response(),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    message: message.to_owned(),
                    field: None,
                }),
            )
                .into_response(),
            ApiError::Core(err) => {
                tracing::error!(error = %err, "request failed");
                internal_error()
            }
            ApiError::Export(err) => {
                tracing::error!(error = %err, "export failed");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            message: "Internal Server Error".to_owned(),
            field: None,
        }),
    )
        .into_response()
}
