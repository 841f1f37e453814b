pub mod completions;
pub mod embeddings;
pub mod sqlite;
