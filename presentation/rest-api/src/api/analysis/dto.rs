use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::analysis::model::{CompanyAnalysis, CompanyProfile};

#[derive(Debug, Clone, Object)]
pub struct AnalyzeCompanyRequest {
    /// Company to analyze
    pub company_name: String,
    /// CEO of the company
    pub ceo_name: String,
    /// Supporting free-form text (news articles, memos)
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
}

/// Structured company profile. Fields mirror the analysis contract; text
/// entries may carry the "unverified" marker or "(estimated)" tags.
#[derive(Debug, Clone, Object)]
pub struct CompanyProfileDto {
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

impl From<CompanyProfile> for CompanyProfileDto {
    fn from(profile: CompanyProfile) -> Self {
        Self {
            problem_definition: profile.problem_definition,
            solution_value_prop: profile.solution_value_prop,
            revenue_model_type: profile.revenue_model_type,
            product_core_features: profile.product_core_features,
            core_tech_moat: profile.core_tech_moat,
            ceo_vision_summary: profile.ceo_vision_summary,
            org_culture_biz_focus: profile.org_culture_biz_focus,
            recent_news_summary: profile.recent_news_summary,
            industry_keywords: profile.industry_keywords,
        }
    }
}

impl From<CompanyProfileDto> for CompanyProfile {
    fn from(dto: CompanyProfileDto) -> Self {
        Self {
            problem_definition: dto.problem_definition,
            solution_value_prop: dto.solution_value_prop,
            revenue_model_type: dto.revenue_model_type,
            product_core_features: dto.product_core_features,
            core_tech_moat: dto.core_tech_moat,
            ceo_vision_summary: dto.ceo_vision_summary,
            org_culture_biz_focus: dto.org_culture_biz_focus,
            recent_news_summary: dto.recent_news_summary,
            industry_keywords: dto.industry_keywords,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CompanyAnalysisResponse {
    /// Normalized company name
    pub company_name: String,
    /// Structured profile generated from gathered facts
    pub profile: CompanyProfileDto,
    /// Keywords derived from the profile, input for report generation
    pub keywords: Vec<String>,
    /// Analysis timestamp
    pub analyzed_at: DateTime<Utc>,
}

impl From<CompanyAnalysis> for CompanyAnalysisResponse {
    fn from(analysis: CompanyAnalysis) -> Self {
        Self {
            company_name: analysis.company_name,
            profile: analysis.profile.into(),
            keywords: analysis.keywords,
            analyzed_at: analysis.analyzed_at,
        }
    }
}
