use async_trait::async_trait;

use business::domain::report::errors::ReportError;
use business::domain::report::services::IndustryAnalystService;

use crate::client::{GeminiClient, GeminiRequestError};

pub struct IndustryAnalystGemini {
    client: GeminiClient,
}

impl IndustryAnalystGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn summary_prompt(keywords: &[String]) -> String {
        format!(
            r#"Industry keywords: {}

Write a condensed industry summary following these rules.

Rules:
- A short version of a complete industry analysis
- One combined view, no split between global and Korean markets
- Cover market trends, investment flow, major companies, technology shifts and risk factors
- Every data point must carry a source URL
- Never state data whose URL cannot be verified
- No special characters ("*", "**", "~")
- Plain text only
- No fabricated information"#,
            keywords.join(", ")
        )
    }

    fn detail_prompt(keywords: &[String]) -> String {
        format!(
            r#"Industry keywords: {}

Write a detailed industry report following these rules.

Global market analysis:
- Market size
- CAGR and growth drivers
- Competitive landscape
- Supply chain structure
- Regulatory impact
- Technology shifts
- Major companies
- Outlook

Korean market analysis:
- Market structure
- Government policy and regulatory impact
- Major companies and ecosystem
- Investment trends
- Outlook

Rules:
- Never compare the global and Korean sections with each other
- Every data point must carry a source URL
- Never state data whose URL cannot be verified
- No special characters ("*", "**", "~")
- Expert consulting-report tone
- Plain text only
- No fabricated information"#,
            keywords.join(", ")
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
impl IndustryAnalystService for IndustryAnalystGemini {
    async fn summarize(&self, keywords: &[String]) -> Result<String, ReportError> {
        let body = GeminiClient::text_request_body(&Self::summary_prompt(keywords), false);
        self.client
            .generate_text(&body)
            .await
            .map_err(Self::map_error)
    }

    async fn detail(&self, keywords: &[String]) -> Result<String, ReportError> {
        let body = GeminiClient::text_request_body(&Self::detail_prompt(keywords), false);
        self.client
            .generate_text(&body)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> Vec<String> {
        vec!["fintech".to_string(), "payments".to_string()]
    }

    #[test]
    fn summary_prompt_joins_keywords() {
        let prompt = IndustryAnalystGemini::summary_prompt(&keywords());

        assert!(prompt.contains("fintech, payments"));
        assert!(prompt.contains("source URL"));
    }

    #[test]
    fn detail_prompt_keeps_markets_separate() {
        let prompt = IndustryAnalystGemini::detail_prompt(&keywords());

        assert!(prompt.contains("Global market analysis"));
        assert!(prompt.contains("Korean market analysis"));
        assert!(prompt.contains("Never compare"));
    }

    #[test]
    fn empty_reply_maps_to_empty_report() {
        assert!(matches!(
            IndustryAnalystGemini::map_error(GeminiRequestError::EmptyReply),
            ReportError::EmptyReport
        ));
        assert!(matches!(
            IndustryAnalystGemini::map_error(GeminiRequestError::RequestFailed),
            ReportError::GenerationFailed
        ));
    }
}
