use crate::domain::entities::document::{CollectionInfo, DocumentMetadata, SearchHit};
use crate::domain::error::DomainError;
use crate::domain::ports::vector_store::{VectorRecord, VectorStore};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Mutex;

/// SQLite-backed vector store. The connection mutex serializes writes, so an
/// upsert replaces vector, text and metadata as one atomic statement and
/// concurrent writes to the same id cannot interleave.
pub struct SqliteVectorStore {
    conn: Mutex<Connection>,
    collection_name: String,
}

impl SqliteVectorStore {
    pub fn new(conn: Connection, collection_name: impl Into<String>) -> Self {
        Self {
            conn: Mutex::new(conn),
            collection_name: collection_name.into(),
        }
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
        if a.len() != b.len() || a.is_empty() {
            return 0.0;
        }
        let mut dot = 0.0_f64;
        let mut norm_a = 0.0_f64;
        let mut norm_b = 0.0_f64;
        for (x, y) in a.iter().zip(b.iter()) {
            let x = *x as f64;
            let y = *y as f64;
            dot += x * y;
            norm_a += x * x;
            norm_b += y * y;
        }
        let denom = norm_a.sqrt() * norm_b.sqrt();
        if denom == 0.0 {
            0.0
        } else {
            dot / denom
        }
    }

    /// Cosine distance: 1 − similarity, clamped so float error never yields
    /// a negative distance.
    fn cosine_distance(a: &[f32], b: &[f32]) -> f64 {
        (1.0 - Self::cosine_similarity(a, b)).max(0.0)
    }

    fn serialize_vector(v: &[f32]) -> Vec<u8> {
        v.iter().flat_map(|f| f.to_le_bytes()).collect()
    }

    fn deserialize_vector(bytes: &[u8]) -> Vec<f32> {
        bytes
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect()
    }

    fn parse_metadata(json: &str) -> Result<DocumentMetadata, DomainError> {
        serde_json::from_str(json).map_err(|e| DomainError::Store(format!("Bad metadata: {e}")))
    }

    fn row_to_record(
        id: String,
        text: String,
        metadata: String,
        blob: Vec<u8>,
    ) -> Result<VectorRecord, DomainError> {
        Ok(VectorRecord {
            id,
            embedding: Self::deserialize_vector(&blob),
            text,
            metadata: Self::parse_metadata(&metadata)?,
        })
    }
}

impl VectorStore for SqliteVectorStore {
    fn upsert(&self, record: &VectorRecord) -> Result<(), DomainError> {
        let conn = self.conn.lock().map_err(|e| DomainError::Store(e.to_string()))?;
        let blob = Self::serialize_vector(&record.embedding);
        let metadata = serde_json::to_string(&record.metadata)
            .map_err(|e| DomainError::Store(format!("Metadata encode failed: {e}")))?;
        conn.execute(
            "INSERT OR REPLACE INTO documents (id, text, metadata, embedding) VALUES (?1, ?2, ?3, ?4)",
            params![record.id, record.text, metadata, blob],
        )
        .map_err(|e| DomainError::Store(format!("Failed to upsert document: {e}")))?;
        Ok(())
    }

    fn query(&self, vector: &[f32], limit: usize) -> Result<Vec<SearchHit>, DomainError> {
        let conn = self.conn.lock().map_err(|e| DomainError::Store(e.to_string()))?;
        let mut stmt = conn
            .prepare("SELECT id, text, metadata, embedding FROM documents")
            .map_err(|e| DomainError::Store(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, Vec<u8>>(3)?,
                ))
            })
            .map_err(|e| DomainError::Store(e.to_string()))?;

        let mut hits = Vec::new();
        for row in rows {
            let (id, text, metadata, blob) =
                row.map_err(|e| DomainError::Store(e.to_string()))?;
            let stored = Self::deserialize_vector(&blob);
            hits.push(SearchHit {
                id,
                document: text,
                metadata: Self::parse_metadata(&metadata)?,
                distance: Self::cosine_distance(vector, &stored),
            });
        }

        hits.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(limit);
        Ok(hits)
    }

    fn get(&self, id: &str) -> Result<Option<VectorRecord>, DomainError> {
        let conn = self.conn.lock().map_err(|e| DomainError::Store(e.to_string()))?;
        let row = conn
            .query_row(
                "SELECT id, text, metadata, embedding FROM documents WHERE id = ?1",
                params![id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, Vec<u8>>(3)?,
                    ))
                },
            )
            .optional()
            .map_err(|e| DomainError::Store(e.to_string()))?;

        match row {
            Some((id, text, metadata, blob)) => {
                Ok(Some(Self::row_to_record(id, text, metadata, blob)?))
            }
            None => Ok(None),
        }
    }

    fn get_all(&self) -> Result<Vec<VectorRecord>, DomainError> {
        let conn = self.conn.lock().map_err(|e| DomainError::Store(e.to_string()))?;
        let mut stmt = conn
            .prepare("SELECT id, text, metadata, embedding FROM documents ORDER BY id")
            .map_err(|e| DomainError::Store(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, Vec<u8>>(3)?,
                ))
            })
            .map_err(|e| DomainError::Store(e.to_string()))?;

        let mut records = Vec::new();
        for row in rows {
            let (id, text, metadata, blob) =
                row.map_err(|e| DomainError::Store(e.to_string()))?;
            records.push(Self::row_to_record(id, text, metadata, blob)?);
        }
        Ok(records)
    }

    fn delete(&self, id: &str) -> Result<(), DomainError> {
        let conn = self.conn.lock().map_err(|e| DomainError::Store(e.to_string()))?;
        conn.execute("DELETE FROM documents WHERE id = ?1", params![id])
            .map_err(|e| DomainError::Store(format!("Failed to delete document: {e}")))?;
        Ok(())
    }

    fn delete_all(&self) -> Result<usize, DomainError> {
        let conn = self.conn.lock().map_err(|e| DomainError::Store(e.to_string()))?;
        let deleted = conn
            .execute("DELETE FROM documents", [])
            .map_err(|e| DomainError::Store(format!("Failed to delete documents: {e}")))?;
        Ok(deleted)
    }

    fn count(&self) -> Result<usize, DomainError> {
        let conn = self.conn.lock().map_err(|e| DomainError::Store(e.to_string()))?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM documents", [], |r| r.get(0))
            .map_err(|e| DomainError::Store(e.to_string()))?;
        Ok(count as usize)
    }

    fn stored_dimension(&self) -> Result<Option<usize>, DomainError> {
        let conn = self.conn.lock().map_err(|e| DomainError::Store(e.to_string()))?;
        let blob: Option<Vec<u8>> = conn
            .query_row("SELECT embedding FROM documents LIMIT 1", [], |r| r.get(0))
            .optional()
            .map_err(|e| DomainError::Store(e.to_string()))?;
        Ok(blob.map(|b| b.len() / 4))
    }

    fn info(&self) -> Result<CollectionInfo, DomainError> {
        let count = self.count()?;
        Ok(CollectionInfo {
            name: self.collection_name.clone(),
            metadata: serde_json::json!({
                "description": "Document embeddings for retrieval-augmented answering"
            }),
            count,
        })
    }
}
