use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::report::errors::ReportError;
use crate::domain::report::model::{ReportDocument, industry_brief_filename};
use crate::domain::report::services::ReportComposerService;
use crate::domain::report::use_cases::industry_brief::{
    GenerateIndustryBriefParams, GenerateIndustryBriefUseCase,
};

pub struct GenerateIndustryBriefUseCaseImpl {
    pub composer: Arc<dyn ReportComposerService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateIndustryBriefUseCase for GenerateIndustryBriefUseCaseImpl {
    async fn execute(
        &self,
        params: GenerateIndustryBriefParams,
    ) -> Result<ReportDocument, ReportError> {
        let company_name = params.company_name.trim().to_string();
        if company_name.is_empty() {
            return Err(ReportError::EmptyCompanyName);
        }

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
            .info(&format!("Generating industry brief for {}", company_name));

        let markdown = self
            .composer
            .compose_industry_brief(&company_name, &keywords)
            .await?;

        if markdown.trim().is_empty() {
            return Err(ReportError::EmptyReport);
        }

        Ok(ReportDocument {
            filename: industry_brief_filename(&company_name, Utc::now().date_naive()),
            markdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::model::CompanyProfile;
    use mockall::mock;

    mock! {
        pub Composer {}

        #[async_trait]
        impl ReportComposerService for Composer {
            async fn compose_full(
                &self,
                company_name: &str,
                profile: &CompanyProfile,
                industry_detail: &str,
            ) -> Result<String, ReportError>;

            async fn compose_industry_brief(
                &self,
                company_name: &str,
                keywords: &[String],
            ) -> Result<String, ReportError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(company: &str, keywords: &[&str]) -> GenerateIndustryBriefParams {
        GenerateIndustryBriefParams {
            company_name: company.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn should_generate_brief_with_dated_filename() {
        let mut composer = MockComposer::new();
        composer
            .expect_compose_industry_brief()
            .withf(|company, keywords| company == "Acme" && keywords == ["fintech"])
            .returning(|_, _| Ok("I. Industry overview...".to_string()));

        let use_case = GenerateIndustryBriefUseCaseImpl {
            composer: Arc::new(composer),
            logger: mock_logger(),
        };

        let document = use_case.execute(params("Acme", &["fintech"])).await.unwrap();

        assert!(document.filename.starts_with("Industry_Detail_Acme_"));
        assert!(document.markdown.starts_with("I. Industry overview"));
    }

    #[tokio::test]
    async fn should_reject_blank_company_name() {
        let use_case = GenerateIndustryBriefUseCaseImpl {
            composer: Arc::new(MockComposer::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(" ", &["fintech"])).await;

        assert!(matches!(result, Err(ReportError::EmptyCompanyName)));
    }

    #[tokio::test]
    async fn should_reject_empty_keywords() {
        let use_case = GenerateIndustryBriefUseCaseImpl {
            composer: Arc::new(MockComposer::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Acme", &[])).await;

        assert!(matches!(result, Err(ReportError::NoKeywords)));
    }

    #[tokio::test]
    async fn should_fail_on_blank_brief() {
        let mut composer = MockComposer::new();
        composer
            .expect_compose_industry_brief()
            .returning(|_, _| Ok(String::new()));

        let use_case = GenerateIndustryBriefUseCaseImpl {
            composer: Arc::new(composer),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Acme", &["fintech"])).await;

        assert!(matches!(result, Err(ReportError::EmptyReport)));
    }
}
