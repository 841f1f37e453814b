use std::time::Duration;

/// Which embedding provider to wire in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingBackend {
    /// Deterministic local feature hashing. No credentials, no network.
    Hash,
    /// OpenAI embeddings API.
    OpenAi,
}

/// Immutable configuration for one pipeline instance. Built once (usually
/// via `from_env`) and passed to `RagBase::new`; nothing reads the process
/// environment after construction.
#[derive(Debug, Clone)]
pub struct RagConfig {
    pub db_path: String,
    pub collection_name: String,
    pub embedding_backend: EmbeddingBackend,
    pub embedding_api_key: String,
    pub embedding_model: Option<String>,
    pub completion_api_key: String,
    pub completion_base_url: Option<String>,
    pub completion_model: String,
    pub completion_timeout: Duration,
    pub completion_max_attempts: u32,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl RagConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let backend = match std::env::var("RAGBASE_EMBEDDING_PROVIDER").as_deref() {
            Ok("openai") => EmbeddingBackend::OpenAi,
            _ => EmbeddingBackend::Hash,
        };
        Self {
            db_path: std::env::var("RAGBASE_DB").unwrap_or(defaults.db_path),
            collection_name: std::env::var("RAGBASE_COLLECTION").unwrap_or(defaults.collection_name),
            embedding_backend: backend,
            embedding_api_key: std::env::var("RAGBASE_EMBEDDING_API_KEY").unwrap_or_default(),
            embedding_model: std::env::var("RAGBASE_EMBEDDING_MODEL").ok(),
            completion_api_key: std::env::var("RAGBASE_COMPLETION_API_KEY").unwrap_or_default(),
            completion_base_url: std::env::var("RAGBASE_COMPLETION_BASE_URL").ok(),
            completion_model: std::env::var("RAGBASE_COMPLETION_MODEL").unwrap_or(defaults.completion_model),
            completion_timeout: env_parsed("RAGBASE_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.completion_timeout),
            completion_max_attempts: env_parsed("RAGBASE_MAX_ATTEMPTS")
                .unwrap_or(defaults.completion_max_attempts),
            temperature: env_parsed("RAGBASE_TEMPERATURE").unwrap_or(defaults.temperature),
            max_tokens: env_parsed("RAGBASE_MAX_TOKENS").unwrap_or(defaults.max_tokens),
        }
    }
}

/// Reads and parses an environment variable; unset or unparsable means `None`.
fn env_parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}


impl Default for RagConfig {
    fn default() -> Self {
        Self {
            db_path: "./ragbase.db".into(),
            collection_name: "documents".into(),
            embedding_backend: EmbeddingBackend::Hash,
            embedding_api_key: String::new(),
            embedding_model: None,
            completion_api_key: String::new(),
            completion_base_url: None,
            completion_model: "llama3-8b-8192".into(),
            completion_timeout: Duration::from_secs(30),
            completion_max_attempts: 3,
            temperature: 0.2,
            max_tokens: 512,
        }
    }
}
