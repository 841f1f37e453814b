use crate::domain::entities::document::{CollectionInfo, DocumentMetadata, SearchHit};
use crate::domain::error::DomainError;

/// A stored (vector, text, metadata) triple keyed by id.
#[derive(Debug, Clone)]
pub struct VectorRecord {
    pub id: String,
    pub embedding: Vec<f32>,
    pub text: String,
    pub metadata: DocumentMetadata,
}

/// Durable, key-addressed vector collection. Writes are serialized by the
/// implementation so an upsert replaces vector, text and metadata as one
/// atomic operation.
pub trait VectorStore: Send + Sync {
    /// Inserts or fully replaces the record for `record.id`. A `get` on the
    /// same store afterwards observes the new values.
    fn upsert(&self, record: &VectorRecord) -> Result<(), DomainError>;

    /// Up to `limit` nearest records by cosine distance, non-decreasing.
    /// Returns everything when the store holds fewer than `limit` records.
    fn query(&self, vector: &[f32], limit: usize) -> Result<Vec<SearchHit>, DomainError>;

    fn get(&self, id: &str) -> Result<Option<VectorRecord>, DomainError>;

    /// All records, in a stable order within an unmodified snapshot.
    fn get_all(&self) -> Result<Vec<VectorRecord>, DomainError>;

    /// Removes the record if present. Removing an unknown id is a no-op.
    fn delete(&self, id: &str) -> Result<(), DomainError>;

    /// Removes every record, returning the count immediately before the call.
    fn delete_all(&self) -> Result<usize, DomainError>;

    fn count(&self) -> Result<usize, DomainError>;

    fn info(&self) -> Result<CollectionInfo, DomainError>;

    /// Dimension of the stored vectors, or `None` for an empty store. Used
    /// to detect an encoder switch against an already-populated store.
    fn stored_dimension(&self) -> Result<Option<usize>, DomainError>;
}
