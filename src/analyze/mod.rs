pub mod contact;
pub mod education;
pub mod experience;
pub mod feedback;
pub mod heuristics;
pub mod normalize;
pub mod projects;
pub mod skills;

use crate::relevance::{Relevance, RelevanceEstimator};
use crate::types::input::ScoreRequest;
use crate::types::scoring::{Score, ScoreBreakdown};
use tracing::debug;

/// Final score, its explanation and the relevance that fed it.
#[derive(Debug, Clone)]
pub struct ScoreOutcome {
    pub ats_score: Score,
    pub breakdown: ScoreBreakdown,
    pub feedback: Vec<String>,
    pub relevance: Relevance,
}

/// Runs the full pipeline: section heuristics, optional relevance against the
/// job description, normalization, then feedback. Never fails.
pub fn score_resume(request: &ScoreRequest, estimator: &RelevanceEstimator) -> ScoreOutcome {
    let heuristics = heuristics::compute_heuristics(request);

    let computed = request
        .job_description()
        .map(|job| estimator.estimate(&request.text, job));
    let (ats_score, normalized) =
        normalize::normalize_score(heuristics.score, computed.map(|relevance| relevance.value));
    let breakdown = ScoreBreakdown::merge(&heuristics.breakdown, &normalized);

    let relevance = computed.unwrap_or_else(|| Relevance::none(estimator.preferred_method()));
    let feedback = feedback::compile_feedback(
        &heuristics.feedback,
        relevance,
        &request.sections,
        &request.contact,
        &breakdown,
    );

    debug!(
        heuristic = heuristics.score,
        relevance = relevance.value,
        ats_score,
        "resume scored"
    );

    ScoreOutcome {
        ats_score,
        breakdown,
        feedback,
        relevance,
    }
}

pub(crate) fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

/// Number of distinct needles present, not occurrences.
pub(crate) fn count_present(text: &str, needles: &[&str]) -> usize {
    needles.iter().filter(|needle| text.contains(*needle)).count()
}
