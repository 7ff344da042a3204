use async_trait::async_trait;

use super::errors::AnalysisError;
use super::model::{AnalysisRequest, CompanyProfile};

/// Service port for collecting verified, search-grounded facts about a
/// company before any structured analysis happens.
#[async_trait]
pub trait FactGathererService: Send + Sync {
    async fn gather(&self, request: &AnalysisRequest) -> Result<String, AnalysisError>;
}

/// Service port for turning gathered facts into a structured profile.
#[async_trait]
pub trait ProfileGeneratorService: Send + Sync {
    async fn generate(
        &self,
        company_name: &str,
        facts: &str,
    ) -> Result<CompanyProfile, AnalysisError>;
}
