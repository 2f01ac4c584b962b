use super::{contains_any, count_present};
use crate::types::scoring::Score;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IMPACT_RE: Regex =
        Regex::new(r"\d+\s*(?:users|downloads|stars|forks|views)|deployed|production|live").unwrap();
}

/// Phrases that reveal project work when no projects section was detected.
const PROJECT_INDICATORS: &[&str] = &[
    "github.com",
    "project:",
    "built a",
    "created a",
    "developed a",
    "hackathon",
];

const TECH_STACK: &[&str] = &[
    "react",
    "node",
    "python",
    "javascript",
    "typescript",
    "java",
    "golang",
    "rust",
    "aws",
    "docker",
    "kubernetes",
    "mongodb",
    "postgresql",
    "api",
    "machine learning",
    "tensorflow",
    "pytorch",
    "database",
    "microservices",
];

const HOSTING_LINKS: &[&str] = &[
    "github.com",
    "gitlab.com",
    "bitbucket",
    "herokuapp",
    "vercel",
    "netlify",
    "http://",
    "https://",
];

/// Scores project quality in `[0, 10]`. `full_text` must already be lowercase.
pub fn projects_score(section: Option<&str>, full_text: &str) -> Score {
    let text = match section {
        Some(section) => format!("{section} {full_text}").to_lowercase(),
        None if contains_any(full_text, PROJECT_INDICATORS) => full_text.to_lowercase(),
        None => return 0.0,
    };

    let mut score = 2.0;
    score += f64::min(3.0, count_present(&text, TECH_STACK) as f64 * 0.5);
    score += f64::min(2.0, IMPACT_RE.find_iter(&text).count() as f64 * 0.5);
    score += f64::min(2.0, count_present(&text, HOSTING_LINKS) as f64 * 0.7);
    score += match text.matches("project").count() {
        0 | 1 => 0.0,
        2 => 0.5,
        _ => 1.0,
    };

    f64::min(10.0, score)
}
