use crate::types::report::{ScoreReport, SimilarityReport};

pub fn to_json(report: &ScoreReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn similarity_to_json(report: &SimilarityReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
