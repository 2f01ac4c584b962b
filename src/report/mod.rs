pub mod json;
pub mod md;

use crate::analyze::ScoreOutcome;
use crate::error::ScorerError;
use crate::types::input::ScoreRequest;
use crate::types::report::ScoreReport;
use chrono::Utc;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn from_config(value: &str) -> Option<Self> {
        match value {
            "json" => Some(OutputFormat::Json),
            "md" => Some(OutputFormat::Md),
            _ => None,
        }
    }
}

pub fn build_report(
    request: &ScoreRequest,
    outcome: ScoreOutcome,
    source: Option<String>,
) -> ScoreReport {
    ScoreReport {
        source,
        ats_score: outcome.ats_score,
        breakdown: outcome.breakdown,
        feedback: outcome.feedback,
        similarity_method: outcome.relevance.method,
        parsed_skills: request.skills.clone(),
        parsing_errors: request.parsing_errors.clone(),
        contact: request.contact.clone(),
        input_digest: sha256_hex(request.text.as_bytes()),
        generated_at: Utc::now(),
    }
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, ScorerError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ScorerError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::analyze::score_resume;
    use crate::relevance::RelevanceEstimator;

    pub(crate) fn sample_report() -> ScoreReport {
        let request: ScoreRequest = serde_json::from_str(
            r#"{
                "text": "Jane Doe\njane@example.com\nEducation\nBSc Computer Science",
                "sections": {"education": "BSc Computer Science"},
                "skills": ["Rust", "SQL"],
                "contact": {"email": "jane@example.com"},
                "parsing_errors": ["scanned page"]
            }"#,
        )
        .expect("request should parse");
        let outcome = score_resume(&request, &RelevanceEstimator::tfidf_only());
        build_report(&request, outcome, Some("jane.json".to_string()))
    }

    #[test]
    fn digest_is_sha256_of_resume_text() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(sample_report().input_digest.len(), 64);
    }

    #[test]
    fn config_format_names() {
        assert_eq!(OutputFormat::from_config("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_config("md"), Some(OutputFormat::Md));
        assert_eq!(OutputFormat::from_config("sarif"), None);
    }
}
