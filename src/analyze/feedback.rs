use crate::relevance::{Relevance, SimilarityMethod};
use crate::types::input::{ContactInfo, Sections};
use crate::types::scoring::{display_score, round_to, ScoreBreakdown};

/// Below this, embedding-based scoring adds keyword recommendations.
const RECOMMENDATION_THRESHOLD: f64 = 0.4;

/// Builds the ordered feedback shown to the user: heuristic notes first, then
/// relevance, section and contact summaries, the breakdown line, and finally
/// recommendations when an embedding match came out weak.
pub fn compile_feedback(
    heuristic_feedback: &[String],
    relevance: Relevance,
    sections: &Sections,
    contact: &ContactInfo,
    breakdown: &ScoreBreakdown,
) -> Vec<String> {
    let mut feedback = heuristic_feedback.to_vec();

    feedback.push(format!(
        "Relevance ({}) = {}",
        relevance.method,
        display_score(round_to(relevance.value, 3))
    ));
    feedback.push(relevance_interpretation(relevance.value).to_string());

    for (name, present) in [
        ("Education", sections.education().is_some()),
        ("Experience", sections.experience().is_some()),
        ("Skills", sections.skills().is_some()),
    ] {
        if present {
            feedback.push(format!("{name} section detected"));
        } else {
            feedback.push(format!(
                "{name} section NOT detected - consider adding this section"
            ));
        }
    }

    match contact.email() {
        Some(email) => feedback.push(format!("Email found: {email}")),
        None => feedback.push("Email not found - add professional email address".to_string()),
    }
    match contact.phone() {
        Some(phone) => feedback.push(format!("Phone found: {phone}")),
        None => feedback.push("Phone not found - add contact phone number".to_string()),
    }

    feedback.push(format!(
        "Score breakdown: {}",
        breakdown
            .entries()
            .iter()
            .map(|(key, value)| format!("{key}:{value}"))
            .collect::<Vec<_>>()
            .join(", ")
    ));

    if relevance.method == SimilarityMethod::Embedding && relevance.value < RECOMMENDATION_THRESHOLD
    {
        feedback.push(
            "Recommendation: Use more specific technical terms and industry keywords from the job description"
                .to_string(),
        );
        feedback.push(
            "Recommendation: Align your experience descriptions with the job requirements more closely"
                .to_string(),
        );
    }

    feedback
}

fn relevance_interpretation(relevance: f64) -> &'static str {
    if relevance < 0.3 {
        "Low semantic match to job description - consider adding more relevant keywords and skills"
    } else if relevance < 0.6 {
        "Moderate semantic match to job description - good alignment with some improvement opportunities"
    } else {
        "Excellent semantic match to job description - strong alignment with requirements"
    }
}
