use super::{contains_any, count_present};
use crate::types::scoring::{round_to, Score};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref YEARS_RE: Regex = Regex::new(r"(\d+\.?\d*)\s*(?:years?|yrs?)").unwrap();
    static ref MONTHS_RE: Regex = Regex::new(r"(\d+\.?\d*)\s*(?:months?|mos?)").unwrap();
    static ref CALENDAR_YEAR_RE: Regex = Regex::new(r"20[12]\d").unwrap();
    static ref METRIC_RE: Regex = Regex::new(
        r"\d+%|\$\d+[kmb]?|\d+\s*(?:users|customers|clients|projects|applications|team|engineers|developers)"
    )
    .unwrap();
}

const ACTION_VERBS: &[&str] = &[
    "led",
    "developed",
    "implemented",
    "designed",
    "architected",
    "built",
    "managed",
    "created",
    "optimized",
    "improved",
    "reduced",
    "increased",
    "delivered",
    "launched",
    "mentored",
    "scaled",
    "automated",
    "integrated",
    "deployed",
    "spearheaded",
    "established",
    "transformed",
    "pioneered",
];

const SENIORITY: &[&str] = &[
    "senior",
    "lead",
    "principal",
    "staff",
    "architect",
    "manager",
    "director",
    "head",
    "vp",
    "cto",
    "ceo",
];

const TOP_COMPANIES: &[&str] = &[
    "google",
    "amazon",
    "microsoft",
    "meta",
    "facebook",
    "apple",
    "netflix",
    "uber",
    "airbnb",
    "stripe",
    "linkedin",
    "twitter",
    "salesforce",
    "adobe",
];

/// Scores experience quality in `[0, 10]`, rounded to one decimal.
///
/// Duration is worth up to 4 points and is taken from explicit
/// "N years"/"N months" phrases, falling back to calendar years when none
/// add up to a month. Action verbs, quantified results, seniority and a
/// recognized employer add capped bonuses on top.
pub fn experience_score(section: Option<&str>, full_text: &str) -> Score {
    if section.is_none() && !full_text.contains("experience") {
        return 0.0;
    }

    let text = format!("{} {}", section.unwrap_or_default(), full_text).to_lowercase();
    let mut score = duration_points(&text);

    score += f64::min(2.5, count_present(&text, ACTION_VERBS) as f64 * 0.35);
    score += f64::min(2.0, METRIC_RE.find_iter(&text).count() as f64 * 0.4);
    score += f64::min(1.0, count_present(&text, SENIORITY) as f64 * 0.5);
    if contains_any(&text, TOP_COMPANIES) {
        score += 0.5;
    }

    f64::min(10.0, round_to(score, 1))
}

/// Total months from every "N years" and "N months" phrase.
pub fn explicit_months(text: &str) -> f64 {
    let years: f64 = YEARS_RE
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<f64>().ok())
        .sum();
    let months: f64 = MONTHS_RE
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<f64>().ok())
        .sum();
    years * 12.0 + months
}

fn duration_points(text: &str) -> Score {
    let total_months = explicit_months(text);
    if total_months >= 6.0 {
        return 4.0;
    }
    if total_months >= 3.0 {
        return 3.0;
    }
    if total_months >= 1.0 {
        return 2.0;
    }

    let distinct_years = CALENDAR_YEAR_RE
        .find_iter(text)
        .map(|year| year.as_str())
        .collect::<HashSet<_>>()
        .len();
    let ongoing = text.contains("present") || text.contains("current");
    match distinct_years {
        0 if text.chars().count() > 200 => 1.0,
        0 => 0.0,
        1 if ongoing => 4.0,
        1 => 2.5,
        _ => 4.0,
    }
}
