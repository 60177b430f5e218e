// Re-export main components
pub mod document;
pub mod engine;
pub mod error;
pub mod index;
pub mod ranking;
pub mod tfidf;
pub mod tokenizer;

// Re-export commonly used types
pub use document::{DocStats, Document, Vocabulary};
pub use engine::{SimilarityEngine, SimilarityReport};
pub use index::InvertedIndex;
pub use ranking::{most_similar_document, rank_documents, ScoredDocument};
pub use tfidf::{compute_idf, compute_tf, compute_tfidf, IdfVector, ScoreTable, TermFrequencyTable, TfIdfTable};
pub use tokenizer::Tokenizer;

// Re-export error types
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
