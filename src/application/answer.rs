use crate::domain::error::DomainError;
use crate::domain::ports::completion_port::{CompletionEngine, SamplingConfig};
use crate::domain::ports::document_search::DocumentSearch;
use crate::domain::values::context::build_context;
use crate::domain::values::prompt::build_messages;
use crate::domain::values::smalltalk::Smalltalk;
use std::sync::Arc;
use tracing::{debug, error, info};

/// How many documents ground one answer.
const RETRIEVAL_LIMIT: usize = 3;

/// Orchestrates one question: validate, short-circuit small talk, retrieve,
/// assemble context, generate. Performs no writes, so an aborted question
/// leaves the store untouched.
pub struct AnswerService {
    searcher: Arc<dyn DocumentSearch>,
    completion: Arc<dyn CompletionEngine>,
    sampling: SamplingConfig,
}

impl AnswerService {
    pub fn new(
        searcher: Arc<dyn DocumentSearch>,
        completion: Arc<dyn CompletionEngine>,
        sampling: SamplingConfig,
    ) -> Self {
        Self {
            searcher,
            completion,
            sampling,
        }
    }

    /// Answers `question` from stored documents.
    ///
    /// Blank input fails with `DomainError::Validation` before any
    /// collaborator is invoked. Recognized small talk returns its canned
    /// reply without retrieval or generation. Any retrieval or generation
    /// failure is re-raised as `DomainError::AnswerGeneration` with the
    /// cause attached.
    pub async fn answer_question(&self, question: &str) -> Result<String, DomainError> {
        if question.trim().is_empty() {
            return Err(DomainError::Validation("question is empty".to_string()));
        }

        if let Some(category) = Smalltalk::classify(question) {
            info!(?category, "small talk short-circuit");
            return Ok(category.reply().to_string());
        }

        self.generate_answer(question)
            .await
            .map_err(|e| {
                error!(cause = %e, "answer generation failed");
                DomainError::answer_generation(e)
            })
    }

    async fn generate_answer(&self, question: &str) -> Result<String, DomainError> {
        debug!("retrieving context documents");
        let hits = self.searcher.search_similar(question, RETRIEVAL_LIMIT).await?;

        let context = build_context(&hits);
        debug!(documents = hits.len(), context_chars = context.chars().count(), "context assembled");

        let messages = build_messages(&context, question);
        let answer = self
            .completion
            .generate(&messages, &self.sampling)
            .await
            .map_err(DomainError::Completion)?;

        info!(answer_chars = answer.chars().count(), "answer generated");
        Ok(answer)
    }
}
