use crate::domain::entities::document::SearchHit;

/// Fixed sentinel used when retrieval produced nothing usable.
pub const NO_CONTEXT: &str = "No relevant information was found.";

/// Assembles the grounding context from retrieved documents.
///
/// Each document with non-empty text renders as `[title]` on its own line
/// followed by the text; entries are separated by one blank line. A missing
/// title falls back to the document's position ("document 1", ...). When
/// nothing usable was retrieved the fixed `NO_CONTEXT` sentinel is returned.
pub fn build_context(hits: &[SearchHit]) -> String {
    let entries: Vec<String> = hits
        .iter()
        .enumerate()
        .filter(|(_, hit)| !hit.document.trim().is_empty())
        .map(|(i, hit)| {
            let title = if hit.metadata.title.is_empty() {
                format!("document {}", i + 1)
            } else {
                hit.metadata.title.clone()
            };
            format!("[{}]\n{}", title, hit.document)
        })
        .collect();

    if entries.is_empty() {
        NO_CONTEXT.to_string()
    } else {
        entries.join("\n\n")
    }
}
