//! Shared test helpers: in-memory pipeline setup and counting stub
//! collaborators for the answer orchestrator.

#![allow(dead_code)]

use ragbase::application::documents::DocumentService;
use ragbase::domain::entities::document::SearchHit;
use ragbase::domain::error::DomainError;
use ragbase::domain::ports::completion_port::{ChatMessage, CompletionEngine, SamplingConfig};
use ragbase::domain::ports::document_search::DocumentSearch;
use ragbase::domain::ports::embedding_port::EmbeddingProvider;
use ragbase::domain::ports::vector_store::VectorStore;
use ragbase::infrastructure::embeddings::hash::HashEmbedder;
use ragbase::infrastructure::sqlite::migrations::run_migrations;
use ragbase::infrastructure::sqlite::vector_store::SqliteVectorStore;
use rusqlite::Connection;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn memory_store(path: &str) -> Arc<dyn VectorStore> {
    let conn = Connection::open(path).unwrap();
    run_migrations(&conn).unwrap();
    Arc::new(SqliteVectorStore::new(conn, "documents"))
}

pub fn memory_documents() -> Arc<DocumentService> {
    Arc::new(DocumentService::new(
        Arc::new(HashEmbedder::default()),
        memory_store(":memory:"),
    ))
}

pub fn embedder() -> HashEmbedder {
    HashEmbedder::default()
}

/// Completion stub: counts calls, captures every message set, returns a
/// fixed reply.
pub struct StubCompletion {
    pub calls: AtomicUsize,
    pub captured: Mutex<Vec<Vec<ChatMessage>>>,
    pub reply: String,
}

impl StubCompletion {
    pub fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            captured: Mutex::new(Vec::new()),
            reply: reply.to_string(),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_user_content(&self) -> String {
        let captured = self.captured.lock().unwrap();
        let messages = captured.last().expect("no generate call captured");
        messages.last().expect("no user message").content.clone()
    }
}

#[async_trait::async_trait]
impl CompletionEngine for StubCompletion {
    async fn generate(
        &self,
        messages: &[ChatMessage],
        _sampling: &SamplingConfig,
    ) -> Result<String, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.captured.lock().unwrap().push(messages.to_vec());
        Ok(self.reply.clone())
    }
}

/// Searcher stub: counts calls, captures queries, returns canned hits or a
/// configured failure.
pub struct StubSearcher {
    pub hits: Vec<SearchHit>,
    pub calls: AtomicUsize,
    pub queries: Mutex<Vec<String>>,
    pub fail_with: Option<String>,
}

impl StubSearcher {
    pub fn returning(hits: Vec<SearchHit>) -> Arc<Self> {
        Arc::new(Self {
            hits,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
            fail_with: None,
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            hits: Vec::new(),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl DocumentSearch for StubSearcher {
    async fn search_similar(
        &self,
        query: &str,
        _limit: usize,
    ) -> Result<Vec<SearchHit>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        match &self.fail_with {
            Some(message) => Err(DomainError::Store(message.clone())),
            None => Ok(self.hits.clone()),
        }
    }
}

/// Wraps a real searcher to count calls made by the orchestrator.
pub struct CountingSearcher {
    pub inner: Arc<dyn DocumentSearch>,
    pub calls: AtomicUsize,
    pub queries: Mutex<Vec<String>>,
}

impl CountingSearcher {
    pub fn wrap(inner: Arc<dyn DocumentSearch>) -> Arc<Self> {
        Arc::new(Self {
            inner,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl DocumentSearch for CountingSearcher {
    async fn search_similar(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        self.inner.search_similar(query, limit).await
    }
}

/// A search hit with the given title and text; distance defaults to zero.
pub fn hit(id: &str, title: &str, text: &str) -> SearchHit {
    use ragbase::domain::entities::document::DocumentMetadata;
    SearchHit {
        id: id.to_string(),
        document: text.to_string(),
        metadata: DocumentMetadata::new(title.to_string(), text),
        distance: 0.0,
    }
}

/// Embeds `text` with the test encoder, matching what the pipeline stores.
pub async fn encode(text: &str) -> Vec<f32> {
    use ragbase::domain::ports::embedding_port::InputType;
    embedder().embed(text, InputType::Document).await.unwrap()
}
