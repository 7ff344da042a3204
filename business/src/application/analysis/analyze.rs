use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::analysis::errors::AnalysisError;
use crate::domain::analysis::keywords::derive_keywords;
use crate::domain::analysis::model::{CompanyAnalysis, create_analysis_request};
use crate::domain::analysis::services::{FactGathererService, ProfileGeneratorService};
use crate::domain::analysis::use_cases::analyze::{AnalyzeCompanyParams, AnalyzeCompanyUseCase};
use crate::domain::logger::Logger;

pub struct AnalyzeCompanyUseCaseImpl {
    pub gatherer: Arc<dyn FactGathererService>,
    pub profiler: Arc<dyn ProfileGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AnalyzeCompanyUseCase for AnalyzeCompanyUseCaseImpl {
    async fn execute(
        &self,
        params: AnalyzeCompanyParams,
    ) -> Result<CompanyAnalysis, AnalysisError> {
        let request =
            create_analysis_request(params.company_name, params.ceo_name, params.notes)?;

        self.logger
            .info(&format!("Analyzing company: {}", request.company_name));

        let facts = self.gatherer.gather(&request).await?;
        self.logger.debug(&format!(
            "Gathered {} characters of facts for {}",
            facts.len(),
            request.company_name
        ));

        let profile = self.profiler.generate(&request.company_name, &facts).await?;

        let keywords = derive_keywords(&profile);
        self.logger.info(&format!(
            "Analysis finished for {}: {} keywords",
            request.company_name,
            keywords.len()
        ));

        Ok(CompanyAnalysis {
            company_name: request.company_name,
            profile,
            keywords,
            analyzed_at: Utc::now(),
        })
    }
}
