use crate::relevance::SimilarityMethod;
use crate::types::input::{ContactInfo, SkillList};
use crate::types::scoring::{Score, ScoreBreakdown};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub ats_score: Score,
    pub breakdown: ScoreBreakdown,
    pub feedback: Vec<String>,
    pub similarity_method: SimilarityMethod,
    pub parsed_skills: SkillList,
    pub parsing_errors: Vec<String>,
    pub contact: ContactInfo,
    /// Hex SHA-256 of the resume text.
    pub input_digest: String,
    pub generated_at: DateTime<Utc>,
}

/// Output of the standalone similarity check.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityReport {
    pub similarity: f64,
    pub method: SimilarityMethod,
    pub resume_length: usize,
    pub jd_length: usize,
}
