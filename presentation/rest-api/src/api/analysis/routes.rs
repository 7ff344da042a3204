use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::analysis::use_cases::analyze::{
    AnalyzeCompanyParams, AnalyzeCompanyUseCase,
};

use crate::api::analysis::dto::{AnalyzeCompanyRequest, CompanyAnalysisResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AnalysisApi {
    analyze_use_case: Arc<dyn AnalyzeCompanyUseCase>,
}

impl AnalysisApi {
    pub fn new(analyze_use_case: Arc<dyn AnalyzeCompanyUseCase>) -> Self {
        Self { analyze_use_case }
    }
}

/// Analysis API
///
/// Endpoints for running the company-analysis pipeline: search-grounded
/// fact gathering, profile generation, and keyword derivation.
#[OpenApi]
impl AnalysisApi {
    /// Analyze a company
    ///
    /// Gathers verified facts about the company, generates a structured
    /// profile, and derives the industry keywords used by the report
    /// endpoints.
    #[oai(path = "/analysis", method = "post", tag = "ApiTags::Analysis")]
    async fn analyze(&self, body: Json<AnalyzeCompanyRequest>) -> AnalyzeResponse {
        let request = body.0;

        match self
            .analyze_use_case
            .execute(AnalyzeCompanyParams {
                company_name: request.company_name,
                ceo_name: request.ceo_name,
                notes: request.notes,
            })
            .await
        {
            Ok(analysis) => AnalyzeResponse::Ok(Json(analysis.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status {
                    StatusCode::BAD_REQUEST => AnalyzeResponse::BadRequest(json),
                    _ => AnalyzeResponse::UpstreamError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AnalyzeResponse {
    #[oai(status = 200)]
    Ok(Json<CompanyAnalysisResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    UpstreamError(Json<ErrorResponse>),
}
