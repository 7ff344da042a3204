use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::report::errors::ReportError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ReportError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ReportError::NoKeywords => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "report.no_keywords",
            ),
            ReportError::EmptyCompanyName => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "report.empty_company_name",
            ),
            ReportError::GenerationFailed => (
                StatusCode::BAD_GATEWAY,
                "GenerationError",
                "report.generation_failed",
            ),
            ReportError::EmptyReport => (
                StatusCode::BAD_GATEWAY,
                "GenerationError",
                "report.empty_report",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
