use super::stopwords::is_english_stop_word;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static! {
    /// Words of two or more word characters.
    static ref TOKEN_RE: Regex = Regex::new(r"\b\w\w+\b").unwrap();
}

/// Sparse document vector keyed by term; ordered so sums are reproducible.
pub type TermVector = BTreeMap<String, f64>;

/// Lowercased tokens with English stopwords removed.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|token| token.as_str())
        .filter(|token| !is_english_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Fits smoothed IDF weights on `documents` and returns one L2-normalized
/// TF-IDF vector per document, or `None` when no document has any term.
///
/// `idf(t) = ln((1 + n) / (1 + df(t))) + 1`
pub fn fit_transform(documents: &[&str]) -> Option<Vec<TermVector>> {
    let counts: Vec<BTreeMap<String, f64>> = documents
        .iter()
        .map(|document| {
            let mut tf = BTreeMap::new();
            for token in tokenize(document) {
                *tf.entry(token).or_insert(0.0) += 1.0;
            }
            tf
        })
        .collect();

    let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
    for tf in &counts {
        for term in tf.keys() {
            *document_frequency.entry(term.as_str()).or_insert(0) += 1;
        }
    }
    if document_frequency.is_empty() {
        return None;
    }

    let n = documents.len() as f64;
    let idf: BTreeMap<&str, f64> = document_frequency
        .iter()
        .map(|(term, df)| (*term, ((1.0 + n) / (1.0 + *df as f64)).ln() + 1.0))
        .collect();

    Some(
        counts
            .iter()
            .map(|tf| {
                let mut weighted: TermVector = tf
                    .iter()
                    .map(|(term, count)| (term.clone(), count * idf[term.as_str()]))
                    .collect();
                let norm = weighted.values().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for weight in weighted.values_mut() {
                        *weight /= norm;
                    }
                }
                weighted
            })
            .collect(),
    )
}

/// Cosine similarity of two sparse vectors; zero when either is empty.
pub fn sparse_cosine(a: &TermVector, b: &TermVector) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(term, weight)| b.get(term).map(|other| weight * other))
        .sum();
    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// TF-IDF cosine between a job description and a resume, in `[0, 1]`.
/// Degenerate inputs (no vocabulary, NaN) yield `0.0`.
pub fn tfidf_similarity(resume: &str, job: &str) -> f64 {
    let Some(vectors) = fit_transform(&[job, resume]) else {
        return 0.0;
    };
    if vectors.len() < 2 {
        return 0.0;
    }
    let similarity = sparse_cosine(&vectors[0], &vectors[1]);
    if similarity.is_nan() {
        0.0
    } else {
        similarity.clamp(0.0, 1.0)
    }
}
