use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::report::errors::ReportError;
use crate::domain::report::model::{ReportDocument, full_report_filename, source_urls};
use crate::domain::report::services::ReportComposerService;
use crate::domain::report::use_cases::compose_full::{
    ComposeFullReportParams, ComposeFullReportUseCase,
};

pub struct ComposeFullReportUseCaseImpl {
    pub composer: Arc<dyn ReportComposerService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ComposeFullReportUseCase for ComposeFullReportUseCaseImpl {
    async fn execute(
        &self,
        params: ComposeFullReportParams,
    ) -> Result<ReportDocument, ReportError> {
        let company_name = params.company_name.trim().to_string();
        if company_name.is_empty() {
            return Err(ReportError::EmptyCompanyName);
        }

        self.logger
            .info(&format!("Composing full report for {}", company_name));

        let markdown = self
            .composer
            .compose_full(&company_name, &params.profile, &params.industry_detail)
            .await?;

        if markdown.trim().is_empty() {
            return Err(ReportError::EmptyReport);
        }

        if source_urls(&markdown).is_empty() {
            self.logger
                .warn("Full report came back without a single source URL");
        }

        Ok(ReportDocument {
            filename: full_report_filename(&company_name, Utc::now().date_naive()),
            markdown,
        })
    }
}
