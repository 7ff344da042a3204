use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::report::errors::ReportError;
use crate::domain::report::model::{IndustryReport, source_urls};
use crate::domain::report::services::IndustryAnalystService;
use crate::domain::report::use_cases::industry::{
    GenerateIndustryReportParams, GenerateIndustryReportUseCase,
};

pub struct GenerateIndustryReportUseCaseImpl {
    pub analyst: Arc<dyn IndustryAnalystService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateIndustryReportUseCase for GenerateIndustryReportUseCaseImpl {
    async fn execute(
        &self,
        params: GenerateIndustryReportParams,
    ) -> Result<IndustryReport, ReportError> {
        let keywords: Vec<String> = params
            .keywords
            .iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        if keywords.is_empty() {
            return Err(ReportError::NoKeywords);
        }

        self.logger
            .info(&format!("Generating industry report for: {}", keywords.join(", ")));

        let summary = self.analyst.summarize(&keywords).await?;
        let detail = self.analyst.detail(&keywords).await?;

        if summary.trim().is_empty() || detail.trim().is_empty() {
            return Err(ReportError::EmptyReport);
        }

        if source_urls(&detail).is_empty() {
            self.logger
                .warn("Industry detail came back without a single source URL");
        }

        Ok(IndustryReport {
            keywords,
            summary,
            detail,
            generated_at: Utc::now(),
        })
    }
}
