use async_trait::async_trait;
use serde_json::Value;

use business::domain::analysis::errors::AnalysisError;
use business::domain::analysis::model::CompanyProfile;
use business::domain::analysis::services::ProfileGeneratorService;

use crate::client::{GeminiClient, GeminiRequestError};
use crate::json_repair::extract_json;

const ANALYSIS_RULES: &str = r#"Rules:
- Objective, analytical expert tone
- No special characters ("*", "**", "~")
- Each text field at least 120 characters
- No generic filler derived from the company name
- CEO vision only from credible, citable sources
- Organisation culture: do not reference recruiting sites
- Write "unverified" where information cannot be confirmed
- Mark inferences with "(estimated)"
- No promotional or emotional phrasing
- No double quotes inside string values (paraphrase quotations instead)
- Output JSON ONLY"#;

const PROFILE_SCHEMA: &str = r#"{
    "problem_definition": "",
    "solution_value_prop": "",
    "revenue_model_type": "",
    "product_core_features": [],
    "core_tech_moat": "",
    "ceo_vision_summary": "",
    "org_culture_biz_focus": "",
    "recent_news_summary": "",
    "industry_keywords": []
}"#;

pub struct ProfileGeneratorGemini {
    client: GeminiClient,
}

impl ProfileGeneratorGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_prompt(company_name: &str, facts: &str) -> String {
        format!(
            "Below is fact-based information about {}:\n{}\n\n\
             Produce a company-analysis JSON following the rules below.\n\n\
             {}\n\nOutput format:\n{}",
            company_name, facts, ANALYSIS_RULES, PROFILE_SCHEMA
        )
    }

    fn repair_prompt(raw: &str) -> String {
        format!(
            r#"The output below is broken JSON. Keep the content as close to the original as possible, but correct it into standard JSON and output JSON only.

Rules:
- Double quotes inside string values must be escaped as \" or paraphrased away.
- No code fences, no prose, no comments. JSON ONLY.
- Keep key names and structure; only fix values to satisfy JSON syntax.

Original:
{}"#,
            raw
        )
    }

    fn string_field(value: &Value, key: &str) -> String {
        value
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    fn list_field(value: &Value, key: &str) -> Vec<String> {
        value
            .get(key)
            .and_then(|v| v.as_array())
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| entry.as_str())
                    .map(|entry| entry.trim().to_string())
                    .filter(|entry| !entry.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn parse_profile(value: &Value) -> CompanyProfile {
        CompanyProfile {
            problem_definition: Self::string_field(value, "problem_definition"),
            solution_value_prop: Self::string_field(value, "solution_value_prop"),
            revenue_model_type: Self::string_field(value, "revenue_model_type"),
            product_core_features: Self::list_field(value, "product_core_features"),
            core_tech_moat: Self::string_field(value, "core_tech_moat"),
            ceo_vision_summary: Self::string_field(value, "ceo_vision_summary"),
            org_culture_biz_focus: Self::string_field(value, "org_culture_biz_focus"),
            recent_news_summary: Self::string_field(value, "recent_news_summary"),
            industry_keywords: Self::list_field(value, "industry_keywords"),
        }
    }

    fn map_error(error: GeminiRequestError) -> AnalysisError {
        match error {
            GeminiRequestError::EmptyReply => AnalysisError::EmptyResponse,
            _ => AnalysisError::GenerationFailed,
        }
    }
}

#[async_trait]
impl ProfileGeneratorService for ProfileGeneratorGemini {
    async fn generate(
        &self,
        company_name: &str,
        facts: &str,
    ) -> Result<CompanyProfile, AnalysisError> {
        let prompt = Self::build_prompt(company_name, facts);
        let body = GeminiClient::text_request_body(&prompt, false);

        let raw = self
            .client
            .generate_text(&body)
            .await
            .map_err(Self::map_error)?;

        let value = match extract_json(&raw) {
            Ok(value) => value,
            Err(_) => {
                // One repair round: hand the broken output back to the model
                let repair_body =
                    GeminiClient::text_request_body(&Self::repair_prompt(&raw), false);
                let repaired = self
                    .client
                    .generate_text(&repair_body)
                    .await
                    .map_err(Self::map_error)?;

                extract_json(&repaired).map_err(|_| AnalysisError::MalformedProfile)?
            }
        };

        Ok(Self::parse_profile(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_parse_full_profile_from_value() {
        let value = json!({
            "problem_definition": " Fleet downtime is expensive ",
            "solution_value_prop": "Predictive maintenance",
            "revenue_model_type": "SaaS subscription",
            "product_core_features": ["Telemetry ingestion", " Failure prediction "],
            "core_tech_moat": "Proprietary sensor models",
            "ceo_vision_summary": "unverified",
            "org_culture_biz_focus": "Engineering led",
            "recent_news_summary": "Raised series B (estimated)",
            "industry_keywords": ["logistics", "iot"]
        });

        let profile = ProfileGeneratorGemini::parse_profile(&value);

        assert_eq!(profile.problem_definition, "Fleet downtime is expensive");
        assert_eq!(
            profile.product_core_features,
            vec!["Telemetry ingestion", "Failure prediction"]
        );
        assert_eq!(profile.industry_keywords, vec!["logistics", "iot"]);
    }

    #[test]
    fn should_default_missing_and_mistyped_fields() {
        let value = json!({
            "problem_definition": 42,
            "industry_keywords": "not a list"
        });

        let profile = ProfileGeneratorGemini::parse_profile(&value);

        assert!(profile.problem_definition.is_empty());
        assert!(profile.industry_keywords.is_empty());
        assert!(profile.product_core_features.is_empty());
    }

    #[test]
    fn prompt_embeds_facts_and_schema() {
        let prompt = ProfileGeneratorGemini::build_prompt("Acme", "Acme ships telemetry.");

        assert!(prompt.contains("Acme ships telemetry."));
        assert!(prompt.contains("\"industry_keywords\": []"));
        assert!(prompt.contains("Output JSON ONLY"));
    }

    #[test]
    fn repair_prompt_carries_original_output() {
        let prompt = ProfileGeneratorGemini::repair_prompt("{broken");

        assert!(prompt.contains("{broken"));
        assert!(prompt.contains("JSON ONLY"));
    }
}
