use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::report::model::{IndustryReport, ReportDocument};

use crate::api::analysis::dto::CompanyProfileDto;

#[derive(Debug, Clone, Object)]
pub struct IndustryReportRequest {
    /// Keywords from a previous analysis run
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Object)]
pub struct IndustryReportResponse {
    /// Keywords the report was generated from
    pub keywords: Vec<String>,
    /// Condensed industry overview for direct display
    pub summary: String,
    /// Long-form industry analysis with global and Korean sections
    pub detail: String,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
}

impl From<IndustryReport> for IndustryReportResponse {
    fn from(report: IndustryReport) -> Self {
        Self {
            keywords: report.keywords,
            summary: report.summary,
            detail: report.detail,
            generated_at: report.generated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct FullReportRequest {
    pub company_name: String,
    /// Profile from a previous analysis run
    pub profile: CompanyProfileDto,
    /// Detail text from a previous industry report run
    pub industry_detail: String,
}

#[derive(Debug, Clone, Object)]
pub struct IndustryBriefRequest {
    pub company_name: String,
    pub keywords: Vec<String>,
}

/// A report delivered as a downloadable markdown document.
#[derive(Debug, Clone, Object)]
pub struct ReportDocumentResponse {
    /// Suggested download filename, dated
    pub filename: String,
    /// Markdown document body
    pub markdown: String,
}

impl From<ReportDocument> for ReportDocumentResponse {
    fn from(document: ReportDocument) -> Self {
        Self {
            filename: document.filename,
            markdown: document.markdown,
        }
    }
}
