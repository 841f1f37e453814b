use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata stored alongside every document. `created_at` reflects the most
/// recent write for the id, not the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub text_length: usize,
}

impl DocumentMetadata {
    pub fn new(title: String, text: &str) -> Self {
        Self {
            title,
            created_at: Utc::now(),
            text_length: text.chars().count(),
        }
    }
}

/// A fully materialized document, embedding included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub text: String,
    pub metadata: DocumentMetadata,
    pub embedding: Vec<f32>,
}

/// Bulk-listing view of a document; embeddings are omitted.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    pub id: String,
    pub document: String,
    pub metadata: DocumentMetadata,
}

/// One similarity-search match. `distance` is cosine distance
/// (1 − cosine similarity): non-negative, smaller means more similar.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub document: String,
    pub metadata: DocumentMetadata,
    pub distance: f64,
}

/// Description of the backing collection.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionInfo {
    pub name: String,
    pub metadata: serde_json::Value,
    pub count: usize,
}

/// Outcome of a bulk delete.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteAllResult {
    pub success: bool,
    pub deleted_count: usize,
}
