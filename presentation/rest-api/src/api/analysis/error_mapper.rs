use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::analysis::errors::AnalysisError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AnalysisError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            AnalysisError::EmptyCompanyName => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "analysis.empty_company_name",
            ),
            AnalysisError::EmptyCeoName => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "analysis.empty_ceo_name",
            ),
            AnalysisError::GatheringFailed => (
                StatusCode::BAD_GATEWAY,
                "GenerationError",
                "analysis.gathering_failed",
            ),
            AnalysisError::GenerationFailed => (
                StatusCode::BAD_GATEWAY,
                "GenerationError",
                "analysis.generation_failed",
            ),
            AnalysisError::MalformedProfile => (
                StatusCode::BAD_GATEWAY,
                "GenerationError",
                "analysis.malformed_profile",
            ),
            AnalysisError::EmptyResponse => (
                StatusCode::BAD_GATEWAY,
                "GenerationError",
                "analysis.empty_response",
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
