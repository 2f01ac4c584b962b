use super::contains_any;
use crate::types::scoring::Score;

/// Degree families in priority order; the first family present sets the bonus.
const DEGREE_TIERS: &[(&[&str], Score)] = &[
    (&["ph.d", "phd", "doctorate", "doctoral"], 5.0),
    (&["master", "m.s.", "m.sc", "mba", "m.tech", "mtech"], 4.0),
    (
        &["bachelor", "b.s.", "b.sc", "b.tech", "btech", "b.e.", "undergraduate"],
        3.0,
    ),
    (&["diploma", "associate", "certificate"], 1.5),
];

const RELEVANT_FIELDS: &[&str] = &[
    "computer science",
    "software",
    "engineering",
    "information technology",
    "data science",
    "artificial intelligence",
    "machine learning",
    "mathematics",
    "electrical",
    "electronics",
    "cs",
    "cse",
    "it",
    "ece",
];

const TOP_INSTITUTIONS: &[&str] = &[
    "mit",
    "stanford",
    "iit",
    "nit",
    "iiit",
    "bits",
    "harvard",
    "berkeley",
    "carnegie mellon",
    "georgia tech",
    "caltech",
    "oxford",
    "cambridge",
];

/// Scores education quality in `[0, 10]`.
///
/// `full_text` must already be lowercase. Keywords are searched in the
/// section and the whole resume together, so a degree listed outside the
/// detected section still counts.
pub fn education_score(section: Option<&str>, full_text: &str) -> Score {
    if section.is_none() && !full_text.contains("education") {
        return 0.0;
    }

    let text = format!("{} {}", section.unwrap_or_default(), full_text).to_lowercase();
    let mut score = 2.0;

    if let Some((_, bonus)) = DEGREE_TIERS
        .iter()
        .find(|(degrees, _)| contains_any(&text, degrees))
    {
        score += bonus;
    }
    if contains_any(&text, RELEVANT_FIELDS) {
        score += 1.5;
    }
    if contains_any(&text, TOP_INSTITUTIONS) {
        score += 1.0;
    }

    f64::min(10.0, score)
}
