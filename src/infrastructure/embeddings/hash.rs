use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};

const DEFAULT_DIMENSION: usize = 384;

/// Deterministic feature-hashing encoder. Each lowercased token is hashed
/// (FNV-1a) into one of `dimension` buckets and the resulting count vector is
/// L2-normalized. No remote calls, no truncation of long inputs; the same
/// text always yields the same vector. Default provider for offline use and
/// the encoder used by the test suite.
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn fnv1a(bytes: &[u8]) -> u64 {
        let mut hash: u64 = 0xcbf29ce484222325;
        for b in bytes {
            hash ^= *b as u64;
            hash = hash.wrapping_mul(0x100000001b3);
        }
        hash
    }

    fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase())
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for HashEmbedder {
    async fn embed(&self, text: &str, _input_type: InputType) -> Result<Vec<f32>, String> {
        let mut vector = vec![0.0_f32; self.dimension];
        for token in Self::tokenize(text) {
            let bucket = (Self::fnv1a(token.as_bytes()) % self.dimension as u64) as usize;
            vector[bucket] += 1.0;
        }

        let norm = vector.iter().map(|v| (*v as f64).powi(2)).sum::<f64>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v = (*v as f64 / norm) as f32;
            }
        }
        Ok(vector)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn same_text_same_vector() {
        let embedder = HashEmbedder::default();
        let a = embedder.embed("open 9 to 5", InputType::Document).await.unwrap();
        let b = embedder.embed("open 9 to 5", InputType::Query).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), embedder.dimension());
    }

    #[tokio::test]
    async fn vectors_are_normalized() {
        let embedder = HashEmbedder::default();
        let v = embedder.embed("alpha beta gamma", InputType::Document).await.unwrap();
        let norm: f64 = v.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn empty_text_is_zero_vector() {
        let embedder = HashEmbedder::default();
        let v = embedder.embed("   ", InputType::Document).await.unwrap();
        assert!(v.iter().all(|x| *x == 0.0));
    }
}
