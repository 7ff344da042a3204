use async_trait::async_trait;

use crate::domain::report::errors::ReportError;
use crate::domain::report::model::ReportDocument;

pub struct GenerateIndustryBriefParams {
    pub company_name: String,
    pub keywords: Vec<String>,
}

#[async_trait]
pub trait GenerateIndustryBriefUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GenerateIndustryBriefParams,
    ) -> Result<ReportDocument, ReportError>;
}
