pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::answer::AnswerService;
use crate::application::documents::DocumentService;
use crate::config::{EmbeddingBackend, RagConfig};
use crate::domain::entities::document::{
    CollectionInfo, DeleteAllResult, Document, DocumentSummary, SearchHit,
};
use crate::domain::error::DomainError;
use crate::domain::ports::completion_port::{CompletionEngine, SamplingConfig};
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::vector_store::VectorStore;
use crate::infrastructure::completions::groq::GroqCompletion;
use crate::infrastructure::embeddings::hash::HashEmbedder;
use crate::infrastructure::embeddings::openai::OpenAiEmbedder;
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::vector_store::SqliteVectorStore;
use rusqlite::Connection;
use std::sync::Arc;

/// Composition root: wires the embedding provider, the durable vector store
/// and the completion engine into the document and answer services.
pub struct RagBase {
    documents: Arc<DocumentService>,
    answerer: AnswerService,
}

impl RagBase {
    pub fn new(config: &RagConfig) -> Result<Self, DomainError> {
        let embedder: Arc<dyn EmbeddingProvider> = match config.embedding_backend {
            EmbeddingBackend::OpenAi => Arc::new(OpenAiEmbedder::new(
                config.embedding_api_key.clone(),
                config.embedding_model.clone(),
            )),
            EmbeddingBackend::Hash => Arc::new(HashEmbedder::default()),
        };

        let completion: Arc<dyn CompletionEngine> = Arc::new(
            GroqCompletion::new(
                config.completion_api_key.clone(),
                config.completion_base_url.clone(),
                config.completion_timeout,
                config.completion_max_attempts,
            )
            .map_err(DomainError::Completion)?,
        );

        let sampling = SamplingConfig {
            model: config.completion_model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        };

        Self::with_providers(
            &config.db_path,
            &config.collection_name,
            embedder,
            completion,
            sampling,
        )
    }

    pub fn with_providers(
        db_path: &str,
        collection_name: &str,
        embedder: Arc<dyn EmbeddingProvider>,
        completion: Arc<dyn CompletionEngine>,
        sampling: SamplingConfig,
    ) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::Store(format!("DB error: {e}")))?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Store(format!("WAL error: {e}")))?;
        run_migrations(&conn)?;

        let store: Arc<dyn VectorStore> =
            Arc::new(SqliteVectorStore::new(conn, collection_name));

        // Similarity scores are meaningless if the store was populated by a
        // different encoder.
        let provider_dim = embedder.dimension();
        if provider_dim > 0 {
            if let Ok(Some(stored_dim)) = store.stored_dimension() {
                if stored_dim != provider_dim {
                    tracing::warn!(
                        stored_dim,
                        provider_dim,
                        "stored vectors do not match the configured embedding provider; re-add documents to re-embed"
                    );
                }
            }
        }

        let documents = Arc::new(DocumentService::new(embedder, store));
        let answerer = AnswerService::new(documents.clone(), completion, sampling);

        Ok(Self {
            documents,
            answerer,
        })
    }

    // Delegating methods

    pub async fn add_document(
        &self,
        id: &str,
        title: &str,
        text: &str,
    ) -> Result<Vec<f32>, DomainError> {
        self.documents.add_document(id, title, text).await
    }

    pub async fn search_similar(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, DomainError> {
        self.documents.search_similar(query, limit).await
    }

    pub fn get_document(&self, id: &str) -> Result<Document, DomainError> {
        self.documents.get_document(id)
    }

    pub fn delete_document(&self, id: &str) -> Result<bool, DomainError> {
        self.documents.delete_document(id)
    }

    pub fn delete_all_documents(&self) -> Result<DeleteAllResult, DomainError> {
        self.documents.delete_all_documents()
    }

    pub fn get_all_documents(&self) -> Result<Vec<DocumentSummary>, DomainError> {
        self.documents.get_all_documents()
    }

    pub fn collection_info(&self) -> Result<CollectionInfo, DomainError> {
        self.documents.collection_info()
    }

    pub async fn answer_question(&self, question: &str) -> Result<String, DomainError> {
        self.answerer.answer_question(question).await
    }
}
