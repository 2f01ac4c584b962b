use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref NON_LETTER_RE: Regex = Regex::new(r"[^a-z\s]").unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Lowercases, replaces anything but ASCII letters with spaces, collapses
/// whitespace and drops stopwords when a set is given.
pub fn clean_text(text: &str, stop_words: Option<&HashSet<String>>) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let letters = NON_LETTER_RE.replace_all(&lowered, " ");
    let collapsed = WHITESPACE_RE.replace_all(&letters, " ");
    let trimmed = collapsed.trim();

    match stop_words {
        Some(words) if !words.is_empty() => trimmed
            .split_whitespace()
            .filter(|word| !words.contains(*word))
            .collect::<Vec<_>>()
            .join(" "),
        _ => trimmed.to_string(),
    }
}
