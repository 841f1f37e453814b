pub mod completion_port;
pub mod document_search;
pub mod embedding_port;
pub mod vector_store;
