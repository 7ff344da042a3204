/// Report errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("report.no_keywords")]
    NoKeywords,
    #[error("report.empty_company_name")]
    EmptyCompanyName,
    #[error("report.generation_failed")]
    GenerationFailed,
    #[error("report.empty_report")]
    EmptyReport,
}
