use super::contact::contact_score;
use super::education::education_score;
use super::experience::experience_score;
use super::projects::projects_score;
use super::skills::skills_score;
use crate::types::input::ScoreRequest;
use crate::types::scoring::{round_to, HeuristicBreakdown, Score};
use tracing::debug;

pub const MAX_HEURISTIC_SCORE: Score = 50.0;
pub const PENALTY_PER_ERROR: i32 = 5;
pub const MAX_PARSING_PENALTY: i32 = 10;

/// Sections scoring below this get a feedback message.
const FEEDBACK_THRESHOLD: Score = 5.0;

/// Heuristic total in `[0, 50]` with its per-section explanation.
#[derive(Debug, Clone)]
pub struct HeuristicOutcome {
    pub score: Score,
    pub breakdown: HeuristicBreakdown,
    pub feedback: Vec<String>,
}

pub fn parsing_penalty(error_count: usize) -> i32 {
    let count = i32::try_from(error_count).unwrap_or(i32::MAX);
    count.saturating_mul(PENALTY_PER_ERROR).min(MAX_PARSING_PENALTY)
}

pub fn compute_heuristics(request: &ScoreRequest) -> HeuristicOutcome {
    let text_lower = request.text.to_lowercase();
    let sections = &request.sections;
    let mut feedback = Vec::new();

    let education = education_score(sections.education(), &text_lower);
    let experience = experience_score(sections.experience(), &text_lower);
    let skill_count = request.skills.len();
    let skills = skills_score(skill_count);
    let projects = projects_score(sections.projects(), &text_lower);
    let contact = contact_score(&request.contact, &text_lower);
    debug!(education, experience, skills, projects, contact, "section scores");

    push_section_feedback(
        &mut feedback,
        education,
        "Missing or undetected Education section",
        "Education section lacks detail - include degree, field, and institution",
    );
    push_section_feedback(
        &mut feedback,
        experience,
        "Missing or undetected Experience section",
        "Experience lacks impact - add action verbs (led, developed, increased) and quantified results (40%, $1M, 10K users)",
    );
    push_section_feedback(
        &mut feedback,
        skills,
        "Missing or undetected Skills section",
        &format!(
            "Only {skill_count} technical skills detected - add more relevant technologies (target: 20+)"
        ),
    );
    push_section_feedback(
        &mut feedback,
        projects,
        "Missing Projects section - showcase your work with technical details",
        "Projects need more detail - include tech stack, your role, and impact",
    );
    push_section_feedback(
        &mut feedback,
        contact,
        "Missing contact information - add email, phone, and LinkedIn/GitHub",
        "Contact info incomplete - add email, phone, and LinkedIn/GitHub",
    );

    let mut score = education + experience + skills + projects + contact;

    let penalty = if request.parsing_errors.is_empty() {
        0
    } else {
        let penalty = parsing_penalty(request.parsing_errors.len());
        score -= f64::from(penalty);
        feedback.push(format!(
            "Parsing issues detected: {}",
            request
                .parsing_errors
                .iter()
                .take(3)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("; ")
        ));
        penalty
    };

    HeuristicOutcome {
        score: score.clamp(0.0, MAX_HEURISTIC_SCORE),
        breakdown: HeuristicBreakdown {
            education: round_to(education, 1),
            experience: round_to(experience, 1),
            skills: round_to(skills, 1),
            projects: round_to(projects, 1),
            contact: round_to(contact, 1),
            parsing_penalty: -penalty,
        },
        feedback,
    }
}

fn push_section_feedback(feedback: &mut Vec<String>, score: Score, missing: &str, weak: &str) {
    if score >= FEEDBACK_THRESHOLD {
        return;
    }
    if score == 0.0 {
        feedback.push(missing.to_string());
    } else {
        feedback.push(weak.to_string());
    }
}
