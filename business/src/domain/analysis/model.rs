use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::AnalysisError;

/// Marker the model is instructed to emit for facts it cannot verify.
/// Keywords carrying it are discarded before any report generation.
pub const UNVERIFIED_MARKER: &str = "unverified";

/// Input for a company analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub company_name: String,
    pub ceo_name: String,
    /// Free-form supporting text supplied by the caller (news, memos).
    pub notes: Option<String>,
}

/// Creates a new AnalysisRequest with validation.
pub fn create_analysis_request(
    company_name: String,
    ceo_name: String,
    notes: Option<String>,
) -> Result<AnalysisRequest, AnalysisError> {
    if company_name.trim().is_empty() {
        return Err(AnalysisError::EmptyCompanyName);
    }

    if ceo_name.trim().is_empty() {
        return Err(AnalysisError::EmptyCeoName);
    }

    Ok(AnalysisRequest {
        company_name: company_name.trim().to_string(),
        ceo_name: ceo_name.trim().to_string(),
        notes: notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty()),
    })
}

/// Structured company profile produced by the analysis pipeline.
///
/// Field names double as the JSON contract the model is asked to fill,
/// so renaming one here changes the generation prompt schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub problem_definition: String,
    pub solution_value_prop: String,
    pub revenue_model_type: String,
    pub product_core_features: Vec<String>,
    pub core_tech_moat: String,
    pub ceo_vision_summary: String,
    pub org_culture_biz_focus: String,
    pub recent_news_summary: String,
    pub industry_keywords: Vec<String>,
}

/// Outcome of a full analysis run.
#[derive(Debug, Clone)]
pub struct CompanyAnalysis {
    pub company_name: String,
    pub profile: CompanyProfile,
    /// Keywords derived from the profile, see [`super::keywords`].
    pub keywords: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_trim_request_fields() {
        let request = create_analysis_request(
            "  Mark & Company  ".to_string(),
            " Kyungpyo Hong ".to_string(),
            Some("  recent funding round  ".to_string()),
        )
        .unwrap();

        assert_eq!(request.company_name, "Mark & Company");
        assert_eq!(request.ceo_name, "Kyungpyo Hong");
        assert_eq!(request.notes, Some("recent funding round".to_string()));
    }

    #[test]
    fn should_reject_blank_company_name() {
        let result = create_analysis_request("   ".to_string(), "Jane Doe".to_string(), None);

        assert!(matches!(result, Err(AnalysisError::EmptyCompanyName)));
    }

    #[test]
    fn should_reject_blank_ceo_name() {
        let result = create_analysis_request("Acme".to_string(), "".to_string(), None);

        assert!(matches!(result, Err(AnalysisError::EmptyCeoName)));
    }

    #[test]
    fn should_drop_blank_notes() {
        let request =
            create_analysis_request("Acme".to_string(), "Jane Doe".to_string(), Some("  ".into()))
                .unwrap();

        assert!(request.notes.is_none());
    }

    #[test]
    fn should_serialize_profile_with_contract_field_names() {
        let profile = CompanyProfile::default();

        let value = serde_json::to_value(&profile).unwrap();
        let object = value.as_object().unwrap();

        for field in [
            "problem_definition",
            "solution_value_prop",
            "revenue_model_type",
            "product_core_features",
            "core_tech_moat",
            "ceo_vision_summary",
            "org_culture_biz_focus",
            "recent_news_summary",
            "industry_keywords",
        ] {
            assert!(object.contains_key(field), "missing field {}", field);
        }
    }
}
