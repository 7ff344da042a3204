use async_trait::async_trait;

use crate::domain::analysis::errors::AnalysisError;
use crate::domain::analysis::model::CompanyAnalysis;

pub struct AnalyzeCompanyParams {
    pub company_name: String,
    pub ceo_name: String,
    pub notes: Option<String>,
}

#[async_trait]
pub trait AnalyzeCompanyUseCase: Send + Sync {
    async fn execute(&self, params: AnalyzeCompanyParams)
    -> Result<CompanyAnalysis, AnalysisError>;
}
