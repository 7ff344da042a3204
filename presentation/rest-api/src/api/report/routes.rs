use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::report::use_cases::compose_full::{
    ComposeFullReportParams, ComposeFullReportUseCase,
};
use business::domain::report::use_cases::industry::{
    GenerateIndustryReportParams, GenerateIndustryReportUseCase,
};
use business::domain::report::use_cases::industry_brief::{
    GenerateIndustryBriefParams, GenerateIndustryBriefUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::report::dto::{
    FullReportRequest, IndustryBriefRequest, IndustryReportRequest, IndustryReportResponse,
    ReportDocumentResponse,
};
use crate::api::tags::ApiTags;

pub struct ReportApi {
    industry_use_case: Arc<dyn GenerateIndustryReportUseCase>,
    compose_full_use_case: Arc<dyn ComposeFullReportUseCase>,
    industry_brief_use_case: Arc<dyn GenerateIndustryBriefUseCase>,
}

impl ReportApi {
    pub fn new(
        industry_use_case: Arc<dyn GenerateIndustryReportUseCase>,
        compose_full_use_case: Arc<dyn ComposeFullReportUseCase>,
        industry_brief_use_case: Arc<dyn GenerateIndustryBriefUseCase>,
    ) -> Self {
        Self {
            industry_use_case,
            compose_full_use_case,
            industry_brief_use_case,
        }
    }
}

/// Report API
///
/// Endpoints for turning analysis output into industry reports and
/// downloadable markdown documents.
#[OpenApi]
impl ReportApi {
    /// Generate an industry report
    ///
    /// Produces a condensed summary and a long-form detail text from the
    /// keywords a previous analysis derived.
    #[oai(path = "/reports/industry", method = "post", tag = "ApiTags::Reports")]
    async fn industry(&self, body: Json<IndustryReportRequest>) -> IndustryResponse {
        match self
            .industry_use_case
            .execute(GenerateIndustryReportParams {
                keywords: body.0.keywords,
            })
            .await
        {
            Ok(report) => IndustryResponse::Ok(Json(report.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status {
                    StatusCode::BAD_REQUEST => IndustryResponse::BadRequest(json),
                    _ => IndustryResponse::UpstreamError(json),
                }
            }
        }
    }

    /// Compose the full report
    ///
    /// Folds a company profile and a detailed industry report into one
    /// combined narrative, returned as a dated markdown document.
    #[oai(path = "/reports/full", method = "post", tag = "ApiTags::Reports")]
    async fn full(&self, body: Json<FullReportRequest>) -> DocumentResponse {
        let request = body.0;

        match self
            .compose_full_use_case
            .execute(ComposeFullReportParams {
                company_name: request.company_name,
                profile: request.profile.into(),
                industry_detail: request.industry_detail,
            })
            .await
        {
            Ok(document) => DocumentResponse::Ok(Json(document.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status {
                    StatusCode::BAD_REQUEST => DocumentResponse::BadRequest(json),
                    _ => DocumentResponse::UpstreamError(json),
                }
            }
        }
    }

    /// Generate the industry brief
    ///
    /// An A4-length sector deep-dive for the company, following a fixed
    /// four-part outline, returned as a dated markdown document.
    #[oai(path = "/reports/brief", method = "post", tag = "ApiTags::Reports")]
    async fn brief(&self, body: Json<IndustryBriefRequest>) -> DocumentResponse {
        let request = body.0;

        match self
            .industry_brief_use_case
            .execute(GenerateIndustryBriefParams {
                company_name: request.company_name,
                keywords: request.keywords,
            })
            .await
        {
            Ok(document) => DocumentResponse::Ok(Json(document.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status {
                    StatusCode::BAD_REQUEST => DocumentResponse::BadRequest(json),
                    _ => DocumentResponse::UpstreamError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum IndustryResponse {
    #[oai(status = 200)]
    Ok(Json<IndustryReportResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    UpstreamError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DocumentResponse {
    #[oai(status = 200)]
    Ok(Json<ReportDocumentResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    UpstreamError(Json<ErrorResponse>),
}
