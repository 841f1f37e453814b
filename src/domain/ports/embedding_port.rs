/// Whether the text being embedded is a stored passage or a search query.
/// Some models encode the two differently; providers may ignore it.
#[derive(Debug, Clone, Copy)]
pub enum InputType {
    Document,
    Query,
}

#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Encodes `text` into a vector of length `dimension()`. Deterministic
    /// for a fixed model version; stateless and safe to call concurrently.
    async fn embed(&self, text: &str, input_type: InputType) -> Result<Vec<f32>, String>;

    fn dimension(&self) -> usize;
}
