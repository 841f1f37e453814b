use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ragbase", about = "Retrieval-augmented document answering")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add or overwrite a document
    Add {
        /// Document title
        title: String,
        /// Document text (the content that gets embedded)
        text: String,
        /// Document id; a random UUID is generated when omitted
        #[arg(long)]
        id: Option<String>,
    },
    /// Similarity search over stored documents
    Search {
        query: String,
        #[arg(long, default_value = "5")]
        limit: usize,
    },
    /// Fetch one document by id, embedding included
    Get {
        id: String,
    },
    /// List all documents (embeddings omitted)
    List,
    /// Delete one document by id
    Delete {
        id: String,
    },
    /// Delete every document in the collection
    DeleteAll,
    /// Show collection name, metadata and document count
    Info,
    /// Answer a question from stored documents
    Ask {
        question: String,
    },
}
