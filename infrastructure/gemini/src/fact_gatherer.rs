use async_trait::async_trait;

use business::domain::analysis::errors::AnalysisError;
use business::domain::analysis::model::AnalysisRequest;
use business::domain::analysis::services::FactGathererService;

use crate::client::{GeminiClient, GeminiRequestError};

pub struct FactGathererGemini {
    client: GeminiClient,
}

impl FactGathererGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_prompt(request: &AnalysisRequest) -> String {
        format!(
            r#"Collect fact-based information about the company {} and its CEO {} using Google Search.

Rules:
- Report verified facts only
- Always include CEO interviews or public statements when they exist
- No speculation, no summarizing, no interpretation
- No JSON
- Plain text only"#,
            request.company_name, request.ceo_name
        )
    }

    fn map_error(error: GeminiRequestError) -> AnalysisError {
        match error {
            GeminiRequestError::EmptyReply => AnalysisError::EmptyResponse,
            _ => AnalysisError::GatheringFailed,
        }
    }
}

#[async_trait]
impl FactGathererService for FactGathererGemini {
    async fn gather(&self, request: &AnalysisRequest) -> Result<String, AnalysisError> {
        let prompt = Self::build_prompt(request);

        let grounded = GeminiClient::text_request_body(&prompt, true);
        match self.client.generate_text(&grounded).await {
            Ok(facts) => Ok(facts),
            Err(GeminiRequestError::EmptyReply) => Err(AnalysisError::EmptyResponse),
            Err(_) => {
                // Search grounding is flaky; retry once without the tool,
                // folding the caller's supporting notes into the prompt.
                let fallback_prompt = match &request.notes {
                    Some(notes) => format!("{}\n\n{}", notes, prompt),
                    None => prompt,
                };
                let plain = GeminiClient::text_request_body(&fallback_prompt, false);
                self.client
                    .generate_text(&plain)
                    .await
                    .map_err(Self::map_error)
            }
        }
    }
}
