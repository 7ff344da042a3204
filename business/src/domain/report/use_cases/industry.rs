use async_trait::async_trait;

use crate::domain::report::errors::ReportError;
use crate::domain::report::model::IndustryReport;

pub struct GenerateIndustryReportParams {
    pub keywords: Vec<String>,
}

#[async_trait]
pub trait GenerateIndustryReportUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GenerateIndustryReportParams,
    ) -> Result<IndustryReport, ReportError>;
}
