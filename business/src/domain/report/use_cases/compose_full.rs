use async_trait::async_trait;

use crate::domain::analysis::model::CompanyProfile;
use crate::domain::report::errors::ReportError;
use crate::domain::report::model::ReportDocument;

pub struct ComposeFullReportParams {
    pub company_name: String,
    pub profile: CompanyProfile,
    /// Detailed industry text from a previous industry report run.
    pub industry_detail: String,
}

#[async_trait]
pub trait ComposeFullReportUseCase: Send + Sync {
    async fn execute(&self, params: ComposeFullReportParams)
    -> Result<ReportDocument, ReportError>;
}
