use sha2::{Digest, Sha256};
use thiserror::Error;

pub const DEFAULT_DIMENSIONS: usize = 256;

#[derive(Error, Debug)]
pub enum EmbeddingError {
    #[error("cannot encode empty text")]
    EmptyInput,

    #[error("engine produced {actual} values, expected {expected}")]
    Dimensions { expected: usize, actual: usize },

    #[error("embedding backend failed: {0}")]
    Backend(String),
}

/// A sentence encoder producing fixed-length dense vectors.
///
/// Engines are loaded once and shared read-only between scoring calls.
pub trait EmbeddingEngine: Send + Sync {
    fn name(&self) -> &str;

    fn dimensions(&self) -> usize;

    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// Deterministic feature-hashing encoder: every word and adjacent word pair
/// is hashed into a signed bucket, then the vector is L2-normalized.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimensions: usize,
}

impl HashingEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn add_feature(&self, vector: &mut [f32], feature: &str) {
        let digest = Sha256::digest(feature.as_bytes());
        let mut bucket = [0u8; 8];
        bucket.copy_from_slice(&digest[..8]);
        let index = (u64::from_le_bytes(bucket) % self.dimensions as u64) as usize;
        let sign = if digest[8] & 1 == 0 { 1.0 } else { -1.0 };
        vector[index] += sign;
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

impl EmbeddingEngine for HashingEmbedder {
    fn name(&self) -> &str {
        "feature-hashing"
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return Err(EmbeddingError::EmptyInput);
        }

        let mut vector = vec![0.0f32; self.dimensions];
        for word in &words {
            self.add_feature(&mut vector, word);
        }
        for pair in words.windows(2) {
            self.add_feature(&mut vector, &format!("{} {}", pair[0], pair[1]));
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }
        Ok(vector)
    }
}
