/// Analysis errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("analysis.empty_company_name")]
    EmptyCompanyName,
    #[error("analysis.empty_ceo_name")]
    EmptyCeoName,
    #[error("analysis.gathering_failed")]
    GatheringFailed,
    #[error("analysis.generation_failed")]
    GenerationFailed,
    #[error("analysis.malformed_profile")]
    MalformedProfile,
    #[error("analysis.empty_response")]
    EmptyResponse,
}
