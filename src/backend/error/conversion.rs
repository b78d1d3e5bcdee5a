/**
 * Error Conversion
 *
 * This module converts backend errors into HTTP responses so handlers can
 * return `Result<_, BackendError>` directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Validation failed",
 *   "status": 422,
 *   "details": ["\"name\" is not allowed to be empty"]
 * }
 * ```
 *
 * `details` is omitted when empty.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::backend::error::types::BackendError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<String>,
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let Self::Persistence(err) = &self {
            tracing::error!("Store failure: {}", err);
        }

        let body = ErrorBody {
            error: self.message(),
            status: status.as_u16(),
            details: self.details(),
        };

        (status, Json(body)).into_response()
    }
}
