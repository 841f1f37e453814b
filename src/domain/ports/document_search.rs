use crate::domain::entities::document::SearchHit;
use crate::domain::error::DomainError;

/// The retrieval capability the answer orchestrator depends on. Kept narrow
/// so the orchestrator never reaches into the rest of the document service.
#[async_trait::async_trait]
pub trait DocumentSearch: Send + Sync {
    async fn search_similar(&self, query: &str, limit: usize)
        -> Result<Vec<SearchHit>, DomainError>;
}
