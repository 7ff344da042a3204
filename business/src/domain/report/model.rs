use chrono::{DateTime, NaiveDate, Utc};
use url::Url;

/// Industry analysis generated from derived keywords.
///
/// The summary is meant for direct display; the detail is the long-form
/// consulting-style text later folded into the full report.
#[derive(Debug, Clone)]
pub struct IndustryReport {
    pub keywords: Vec<String>,
    pub summary: String,
    pub detail: String,
    pub generated_at: DateTime<Utc>,
}

/// A report rendered as a downloadable markdown document.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub filename: String,
    pub markdown: String,
}

pub fn full_report_filename(company_name: &str, date: NaiveDate) -> String {
    format!("Full_Report_{}_{}.md", company_name, date.format("%Y-%m-%d"))
}

pub fn industry_brief_filename(company_name: &str, date: NaiveDate) -> String {
    format!(
        "Industry_Detail_{}_{}.md",
        company_name,
        date.format("%Y-%m-%d")
    )
}

/// Collects the http(s) URLs cited in a generated report.
///
/// Generation prompts require every data point to carry a source URL, so
/// a report without a single parseable URL broke that contract and the
/// caller is expected to log it.
pub fn source_urls(text: &str) -> Vec<Url> {
    text.split_whitespace()
        .filter(|token| token.starts_with("http://") || token.starts_with("https://"))
        .filter_map(|token| {
            let trimmed = token.trim_end_matches([')', ']', ',', '.', ';', '"']);
            Url::parse(trimmed).ok()
        })
        .collect()
}
