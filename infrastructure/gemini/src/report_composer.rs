use async_trait::async_trait;

use business::domain::analysis::model::CompanyProfile;
use business::domain::report::errors::ReportError;
use business::domain::report::services::ReportComposerService;

use crate::client::{GeminiClient, GeminiRequestError};

const BRIEF_OUTLINE: &str = r#"I. Industry & Market Status
1. Sector definition and analysis scope
2. Market size and growth (source + URL required)
3. Main change drivers

II. Pain Points & Trends
1. The market's pain points
2. Key technology and service trends

III. Competition & Opportunity
1. Core competitor analysis (source + URL required)
2. Differentiation areas open to startups (opportunity gap)

IV. Conclusion & Strategy
1. Summary and final conclusion
2. Strategic direction (go-to-market strategy or key action plan)"#;

pub struct ReportComposerGemini {
    client: GeminiClient,
}

impl ReportComposerGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn full_prompt(
        company_name: &str,
        profile_json: &str,
        industry_detail: &str,
    ) -> String {
        format!(
            r#"Below is the company analysis for {}:
{}

Below is the detailed industry report:
{}

Write one complete combined report in an expert analytical style based on the two inputs above.

Rules:
- Paragraph-form analysis only
- Strategy frameworks (SWOT, 3C, 5 Forces, BCG) are forbidden
- No special characters ("*", "**", "~")
- No generic filler derived from the company name
- CEO vision only from credible, citable sources
- Every claim carries its source and URL
- Never state data whose URL cannot be verified
- Mark market outlooks and inferences with "(estimated)"
- Do not mention JSON
- Plain text only"#,
            company_name, profile_json, industry_detail
        )
    }

    fn brief_prompt(company_name: &str, keywords: &[String]) -> String {
        format!(
            r#"Target company: {}
Industry keywords: {}

Write a detailed industry report of one to two A4 pages about the sector this company operates in, following the outline below.

Hard rules:
- Paragraph-form text only
- No special characters ("*", "**", "~")
- No fabricated information
- Only data whose source URL was verified through search
- Strategy frameworks (SWOT, 3C, 5 Forces) are forbidden
- Expert report tone
- No generic filler derived from the company name

Outline:
{}"#,
            company_name,
            keywords.join(", "),
            BRIEF_OUTLINE
        )
    }

    fn map_error(error: GeminiRequestError) -> ReportError {
        match error {
            GeminiRequestError::EmptyReply => ReportError::EmptyReport,
            _ => ReportError::GenerationFailed,
        }
    }
}

#[async_trait]
impl ReportComposerService for ReportComposerGemini {
    async fn compose_full(
        &self,
        company_name: &str,
        profile: &CompanyProfile,
        industry_detail: &str,
    ) -> Result<String, ReportError> {
        let profile_json = serde_json::to_string_pretty(profile)
            .map_err(|_| ReportError::GenerationFailed)?;

        let prompt = Self::full_prompt(company_name, &profile_json, industry_detail);
        let body = GeminiClient::text_request_body(&prompt, false);

        self.client
            .generate_text(&body)
            .await
            .map_err(Self::map_error)
    }

    async fn compose_industry_brief(
        &self,
        company_name: &str,
        keywords: &[String],
    ) -> Result<String, ReportError> {
        let prompt = Self::brief_prompt(company_name, keywords);
        let body = GeminiClient::text_request_body(&prompt, false);

        self.client
            .generate_text(&body)
            .await
            .map_err(Self::map_error)
    }
}
