use reqwest::Client;
use serde_json::{Value, json};

/// Errors at the Gemini HTTP boundary, mapped to domain errors by the
/// individual adapters.
#[derive(Debug, thiserror::Error)]
pub enum GeminiRequestError {
    #[error("gemini.request_failed")]
    RequestFailed,
    #[error("gemini.bad_status {0}")]
    BadStatus(u16),
    #[error("gemini.empty_reply")]
    EmptyReply,
}

/// Shared Gemini HTTP client configuration.
pub struct GeminiClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        // Long-form report generation regularly exceeds short timeouts
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model,
        }
    }

    /// Returns the generateContent endpoint URL for the configured model.
    pub fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Builds a plain-text generation body. `with_search` attaches the
    /// Google Search grounding tool.
    pub fn text_request_body(prompt: &str, with_search: bool) -> Value {
        let mut body = json!({
            "contents": [{"parts": [{"text": prompt}]}],
            "generationConfig": {"responseMimeType": "text/plain"},
        });

        if with_search {
            body["tools"] = json!([{"google_search": {}}]);
        }

        body
    }

    /// Pulls the reply text out of a generateContent response body.
    pub fn extract_text(data: &Value) -> Option<String> {
        let parts = data["candidates"]
            .as_array()?
            .first()?["content"]["parts"]
            .as_array()?;

        let text: String = parts
            .iter()
            .filter_map(|part| part["text"].as_str())
            .collect();
        let text = text.trim().to_string();

        if text.is_empty() { None } else { Some(text) }
    }

    /// Sends a generateContent request and returns the trimmed reply text.
    pub async fn generate_text(&self, body: &Value) -> Result<String, GeminiRequestError> {
        let response = self
            .client
            .post(self.generate_content_url())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|_| GeminiRequestError::RequestFailed)?;

        if !response.status().is_success() {
            return Err(GeminiRequestError::BadStatus(response.status().as_u16()));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|_| GeminiRequestError::RequestFailed)?;

        Self::extract_text(&data).ok_or(GeminiRequestError::EmptyReply)
    }
}
