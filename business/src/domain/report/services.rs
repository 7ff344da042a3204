use async_trait::async_trait;

use crate::domain::analysis::model::CompanyProfile;

use super::errors::ReportError;

/// Service port for industry-level market analysis from keywords.
#[async_trait]
pub trait IndustryAnalystService: Send + Sync {
    /// Short overview: trends, investment flow, main players, risks.
    async fn summarize(&self, keywords: &[String]) -> Result<String, ReportError>;

    /// Long-form report with separate global and Korean market sections.
    async fn detail(&self, keywords: &[String]) -> Result<String, ReportError>;
}

/// Service port for composing final report documents.
#[async_trait]
pub trait ReportComposerService: Send + Sync {
    /// Folds the company profile and the detailed industry report into
    /// one expert-tone narrative.
    async fn compose_full(
        &self,
        company_name: &str,
        profile: &CompanyProfile,
        industry_detail: &str,
    ) -> Result<String, ReportError>;

    /// A4-length sector deep-dive following the fixed four-part outline.
    async fn compose_industry_brief(
        &self,
        company_name: &str,
        keywords: &[String],
    ) -> Result<String, ReportError>;
}
