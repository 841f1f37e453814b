use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Answer generation failed: {source}")]
    AnswerGeneration {
        #[source]
        source: Box<DomainError>,
    },
}

impl DomainError {
    /// Wraps an upstream failure as the orchestrator's single failure mode.
    pub fn answer_generation(cause: DomainError) -> Self {
        DomainError::AnswerGeneration {
            source: Box::new(cause),
        }
    }
}

impl From<String> for DomainError {
    fn from(s: String) -> Self {
        DomainError::Store(s)
    }
}

impl From<&str> for DomainError {
    fn from(s: &str) -> Self {
        DomainError::Validation(s.to_string())
    }
}
