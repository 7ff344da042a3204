use std::sync::Arc;

use logger::TracingLogger;

use gemini::client::GeminiClient;
use gemini::fact_gatherer::FactGathererGemini;
use gemini::industry_analyst::IndustryAnalystGemini;
use gemini::profile_generator::ProfileGeneratorGemini;
use gemini::report_composer::ReportComposerGemini;

use business::application::analysis::analyze::AnalyzeCompanyUseCaseImpl;
use business::application::report::compose_full::ComposeFullReportUseCaseImpl;
use business::application::report::industry::GenerateIndustryReportUseCaseImpl;
use business::application::report::industry_brief::GenerateIndustryBriefUseCaseImpl;

use crate::config::gemini_config::GeminiConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::HealthApi,
    pub analysis_api: crate::api::analysis::routes::AnalysisApi,
    pub report_api: crate::api::report::routes::ReportApi,
}

impl DependencyContainer {
    pub fn new(gemini_config: GeminiConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::HealthApi::new();

        let new_client = || {
            GeminiClient::new(
                gemini_config.api_key.clone(),
                gemini_config.model.clone(),
            )
        };

        // Infrastructure adapters
        let fact_gatherer = Arc::new(FactGathererGemini::new(new_client()));
        let profile_generator = Arc::new(ProfileGeneratorGemini::new(new_client()));
        let industry_analyst = Arc::new(IndustryAnalystGemini::new(new_client()));
        let report_composer = Arc::new(ReportComposerGemini::new(new_client()));

        // Analysis use cases
        let analyze_use_case = Arc::new(AnalyzeCompanyUseCaseImpl {
            gatherer: fact_gatherer,
            profiler: profile_generator,
            logger: logger.clone(),
        });

        // Report use cases
        let industry_use_case = Arc::new(GenerateIndustryReportUseCaseImpl {
            analyst: industry_analyst,
            logger: logger.clone(),
        });
        let compose_full_use_case = Arc::new(ComposeFullReportUseCaseImpl {
            composer: report_composer.clone(),
            logger: logger.clone(),
        });
        let industry_brief_use_case = Arc::new(GenerateIndustryBriefUseCaseImpl {
            composer: report_composer,
            logger,
        });

        let analysis_api = crate::api::analysis::routes::AnalysisApi::new(analyze_use_case);
        let report_api = crate::api::report::routes::ReportApi::new(
            industry_use_case,
            compose_full_use_case,
            industry_brief_use_case,
        );

        Self {
            health_api,
            analysis_api,
            report_api,
        }
    }
}
