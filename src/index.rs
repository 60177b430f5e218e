use crate::document::DocStats;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inverted index: word -> positions of the documents containing it
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InvertedIndex {
    index: HashMap<String, Vec<usize>>,
    doc_count: usize,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            doc_count: 0,
        }
    }

    pub fn from_stats(stats: &[DocStats]) -> Self {
        let mut index = Self::new();
        for doc in stats {
            index.add_document(doc);
        }
        index
    }

    /// Add a document to the index
    pub fn add_document(&mut self, doc: &DocStats) {
        for (word, &count) in &doc.term_frequencies {
            if count == 0 {
                continue;
            }
            let positions = self.index.entry(word.clone()).or_default();
            if !positions.contains(&doc.position) {
                positions.push(doc.position);
            }
        }

        self.doc_count += 1;
    }

    /// Number of documents containing a word
    pub fn doc_frequency(&self, word: &str) -> usize {
        self.index.get(word).map(|docs| docs.len()).unwrap_or(0)
    }

    /// Get total number of indexed documents
    pub fn total_documents(&self) -> usize {
        self.doc_count
    }
}
