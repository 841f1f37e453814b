use crate::domain::entities::document::{
    CollectionInfo, DeleteAllResult, Document, DocumentMetadata, DocumentSummary, SearchHit,
};
use crate::domain::error::DomainError;
use crate::domain::ports::document_search::DocumentSearch;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::ports::vector_store::{VectorRecord, VectorStore};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Document-shaped operations over an embedding provider and a vector store.
pub struct DocumentService {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStore>,
}

impl DocumentService {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, store: Arc<dyn VectorStore>) -> Self {
        Self { embedder, store }
    }

    /// Encodes `text` and upserts it under `id`, returning the embedding.
    /// An existing id is silently replaced in full; old vector, text and
    /// metadata never survive the write.
    pub async fn add_document(
        &self,
        id: &str,
        title: &str,
        text: &str,
    ) -> Result<Vec<f32>, DomainError> {
        debug!(id, title, "adding document");

        if self.store.get(id)?.is_some() {
            warn!(id, "overwriting existing document");
        }

        let embedding = self
            .embedder
            .embed(text, InputType::Document)
            .await
            .map_err(DomainError::Embedding)?;

        let record = VectorRecord {
            id: id.to_string(),
            embedding: embedding.clone(),
            text: text.to_string(),
            metadata: DocumentMetadata::new(title.to_string(), text),
        };
        self.store.upsert(&record)?;

        info!(id, dimension = embedding.len(), "document stored");
        Ok(embedding)
    }

    /// Encodes `query` with the same provider used for storage and returns
    /// up to `limit` hits ordered by non-decreasing distance.
    pub async fn search_similar(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, DomainError> {
        debug!(limit, "similarity search");
        let vector = self
            .embedder
            .embed(query, InputType::Query)
            .await
            .map_err(DomainError::Embedding)?;
        let hits = self.store.query(&vector, limit)?;
        info!(found = hits.len(), "similarity search done");
        Ok(hits)
    }

    pub fn get_document(&self, id: &str) -> Result<Document, DomainError> {
        let record = self
            .store
            .get(id)?
            .ok_or_else(|| DomainError::NotFound(format!("document {id}")))?;
        Ok(Document {
            id: record.id,
            title: record.metadata.title.clone(),
            text: record.text,
            metadata: record.metadata,
            embedding: record.embedding,
        })
    }

    /// Idempotent: deleting an unknown id succeeds.
    pub fn delete_document(&self, id: &str) -> Result<bool, DomainError> {
        self.store.delete(id)?;
        info!(id, "document deleted");
        Ok(true)
    }

    pub fn delete_all_documents(&self) -> Result<DeleteAllResult, DomainError> {
        let deleted_count = self.store.delete_all()?;
        warn!(deleted_count, "all documents deleted");
        Ok(DeleteAllResult {
            success: true,
            deleted_count,
        })
    }

    pub fn get_all_documents(&self) -> Result<Vec<DocumentSummary>, DomainError> {
        let records = self.store.get_all()?;
        Ok(records
            .into_iter()
            .map(|r| DocumentSummary {
                id: r.id,
                document: r.text,
                metadata: r.metadata,
            })
            .collect())
    }

    pub fn collection_info(&self) -> Result<CollectionInfo, DomainError> {
        self.store.info()
    }
}

#[async_trait::async_trait]
impl DocumentSearch for DocumentService {
    async fn search_similar(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, DomainError> {
        DocumentService::search_similar(self, query, limit).await
    }
}
