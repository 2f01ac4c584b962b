use super::contains_any;
use crate::types::input::ContactInfo;
use crate::types::scoring::Score;

const PORTFOLIO_INDICATORS: &[&str] = &[
    "portfolio",
    "website",
    ".com/",
    ".io/",
    "vercel.app",
    "netlify.app",
];

/// Scores contact completeness in `[0, 10]`. `full_text` must already be lowercase.
pub fn contact_score(contact: &ContactInfo, full_text: &str) -> Score {
    let mut score = 0.0;
    if contact.email().is_some() {
        score += 3.0;
    }
    if contact.phone().is_some() {
        score += 2.0;
    }
    if full_text.contains("linkedin") {
        score += 2.0;
    }
    if full_text.contains("github") {
        score += 2.0;
    }
    if contains_any(full_text, PORTFOLIO_INDICATORS) {
        score += 1.0;
    }
    f64::min(10.0, score)
}
