pub mod embedding;
pub mod stopwords;
pub mod text;
pub mod tfidf;

use embedding::{EmbeddingEngine, EmbeddingError};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimilarityMethod {
    #[serde(rename = "embedding")]
    Embedding,
    #[serde(rename = "TF-IDF")]
    TfIdf,
}

impl fmt::Display for SimilarityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimilarityMethod::Embedding => f.write_str("embedding"),
            SimilarityMethod::TfIdf => f.write_str("TF-IDF"),
        }
    }
}

/// A similarity in `[0, 1]` and the strategy that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relevance {
    pub value: f64,
    pub method: SimilarityMethod,
}

impl Relevance {
    /// Placeholder used when no job description was supplied.
    pub fn none(method: SimilarityMethod) -> Self {
        Self { value: 0.0, method }
    }
}

/// Why the embedding strategy gave up; always handled by the TF-IDF fallback.
#[derive(Error, Debug)]
pub enum FallbackReason {
    #[error(transparent)]
    Engine(#[from] EmbeddingError),

    #[error("embedding lengths differ: {0} vs {1}")]
    DimensionMismatch(usize, usize),

    #[error("similarity is not a finite number")]
    NonFinite,
}

pub trait SimilarityStrategy {
    fn method(&self) -> SimilarityMethod;

    fn similarity(&self, resume: &str, job: &str) -> Result<f64, FallbackReason>;
}

pub struct TfIdfStrategy;

impl SimilarityStrategy for TfIdfStrategy {
    fn method(&self) -> SimilarityMethod {
        SimilarityMethod::TfIdf
    }

    fn similarity(&self, resume: &str, job: &str) -> Result<f64, FallbackReason> {
        Ok(tfidf::tfidf_similarity(resume, job))
    }
}

pub struct EmbeddingStrategy<'a> {
    engine: &'a dyn EmbeddingEngine,
    stop_words: Option<&'a HashSet<String>>,
}

impl EmbeddingStrategy<'_> {
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let vector = self.engine.encode(text)?;
        let expected = self.engine.dimensions();
        if vector.len() != expected {
            return Err(EmbeddingError::Dimensions {
                expected,
                actual: vector.len(),
            });
        }
        Ok(vector)
    }
}

impl SimilarityStrategy for EmbeddingStrategy<'_> {
    fn method(&self) -> SimilarityMethod {
        SimilarityMethod::Embedding
    }

    fn similarity(&self, resume: &str, job: &str) -> Result<f64, FallbackReason> {
        let resume_clean = text::clean_text(resume, self.stop_words);
        let job_clean = text::clean_text(job, self.stop_words);
        if resume_clean.is_empty() || job_clean.is_empty() {
            return Ok(0.0);
        }

        let resume_vector = self.encode(&resume_clean)?;
        let job_vector = self.encode(&job_clean)?;
        let similarity = cosine_similarity(&resume_vector, &job_vector)?;
        Ok(similarity.clamp(0.0, 1.0))
    }
}

/// Dense cosine similarity; zero-norm vectors compare as `0.0`.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, FallbackReason> {
    if a.len() != b.len() {
        return Err(FallbackReason::DimensionMismatch(a.len(), b.len()));
    }
    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    let similarity = dot / (norm_a.sqrt() * norm_b.sqrt());
    if similarity.is_finite() {
        Ok(similarity)
    } else {
        Err(FallbackReason::NonFinite)
    }
}

/// Resume to job-description similarity with an optional embedding engine
/// and a TF-IDF fallback. Never fails.
#[derive(Clone, Default)]
pub struct RelevanceEstimator {
    engine: Option<Arc<dyn EmbeddingEngine>>,
    enabled: bool,
    stop_words: Option<HashSet<String>>,
}

impl fmt::Debug for RelevanceEstimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelevanceEstimator")
            .field("engine", &self.engine.as_ref().map(|engine| engine.name()))
            .field("enabled", &self.enabled)
            .field("stop_words", &self.stop_words.as_ref().map(HashSet::len))
            .finish()
    }
}

impl RelevanceEstimator {
    pub fn new(
        engine: Option<Arc<dyn EmbeddingEngine>>,
        enabled: bool,
        stop_words: Option<HashSet<String>>,
    ) -> Self {
        Self {
            engine,
            enabled,
            stop_words,
        }
    }

    pub fn tfidf_only() -> Self {
        Self::default()
    }

    fn embedding(&self) -> Option<EmbeddingStrategy<'_>> {
        if !self.enabled {
            return None;
        }
        self.engine.as_deref().map(|engine| EmbeddingStrategy {
            engine,
            stop_words: self.stop_words.as_ref(),
        })
    }

    /// The strategy tried first for every estimate.
    pub fn preferred_method(&self) -> SimilarityMethod {
        if self.embedding().is_some() {
            SimilarityMethod::Embedding
        } else {
            SimilarityMethod::TfIdf
        }
    }

    pub fn estimate(&self, resume: &str, job: &str) -> Relevance {
        if let Some(primary) = self.embedding() {
            match primary.similarity(resume, job) {
                Ok(value) => {
                    return Relevance {
                        value: unit_interval(value),
                        method: primary.method(),
                    }
                }
                Err(reason) => {
                    warn!(%reason, "embedding similarity failed, falling back to TF-IDF");
                }
            }
        }

        let fallback = TfIdfStrategy;
        Relevance {
            value: unit_interval(fallback.similarity(resume, job).unwrap_or(0.0)),
            method: fallback.method(),
        }
    }
}

fn unit_interval(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
