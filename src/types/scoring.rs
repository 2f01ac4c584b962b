use serde::Serialize;

pub type Score = f64;

/// Rounds to `digits` decimals the way decimal round-half-even does on the
/// exact binary value, so `2.675` becomes `2.67` rather than `2.68`.
pub fn round_to(value: Score, digits: usize) -> Score {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.digits$}").parse().unwrap_or(value)
}

/// Shortest round-trip rendering used in feedback text (`10.0`, `9.5`, `0.98`).
pub fn display_score(value: Score) -> String {
    format!("{value:?}")
}

/// Per-section quality scores plus the parsing penalty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeuristicBreakdown {
    pub education: Score,
    pub experience: Score,
    pub skills: Score,
    pub projects: Score,
    pub contact: Score,
    /// Zero or negative.
    pub parsing_penalty: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedBreakdown {
    pub heuristics: Score,
    pub relevance: Score,
    pub scaling_factor: Score,
}

/// The full explanation of a final score, in fixed key order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub education: Score,
    pub experience: Score,
    pub skills: Score,
    pub projects: Score,
    pub contact: Score,
    pub parsing_penalty: i32,
    pub heuristics: Score,
    pub relevance: Score,
    pub scaling_factor: Score,
}

impl ScoreBreakdown {
    pub fn merge(heuristic: &HeuristicBreakdown, normalized: &NormalizedBreakdown) -> Self {
        Self {
            education: heuristic.education,
            experience: heuristic.experience,
            skills: heuristic.skills,
            projects: heuristic.projects,
            contact: heuristic.contact,
            parsing_penalty: heuristic.parsing_penalty,
            heuristics: normalized.heuristics,
            relevance: normalized.relevance,
            scaling_factor: normalized.scaling_factor,
        }
    }

    pub fn entries(&self) -> [(&'static str, String); 9] {
        [
            ("education", display_score(self.education)),
            ("experience", display_score(self.experience)),
            ("skills", display_score(self.skills)),
            ("projects", display_score(self.projects)),
            ("contact", display_score(self.contact)),
            ("parsingPenalty", self.parsing_penalty.to_string()),
            ("heuristics", display_score(self.heuristics)),
            ("relevance", display_score(self.relevance)),
            ("scalingFactor", display_score(self.scaling_factor)),
        ]
    }
}
