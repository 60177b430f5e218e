use crate::tokenizer::Tokenizer;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A text document, identified by its position in the corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub position: usize,
    pub text: String,
}

impl Document {
    pub fn new(position: usize, text: String) -> Self {
        Self { position, text }
    }

    /// Build documents from an ordered slice of texts
    pub fn from_texts(texts: &[&str]) -> Vec<Self> {
        texts
            .iter()
            .enumerate()
            .map(|(position, text)| Self::new(position, text.to_string()))
            .collect()
    }
}

/// Id reported by the ranker for the document at `position`
pub fn document_id(position: usize) -> usize {
    position + 1
}

/// Word counts of a single document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocStats {
    pub position: usize,
    pub length: usize,
    pub term_frequencies: HashMap<String, usize>,
}

impl DocStats {
    pub fn from_document(tokenizer: &Tokenizer, doc: &Document) -> Self {
        let term_frequencies = tokenizer.analyze_with_frequencies(&doc.text);
        let length = term_frequencies.values().sum();

        Self {
            position: doc.position,
            length,
            term_frequencies,
        }
    }

    /// Occurrences of `word`, zero when the document does not contain it
    pub fn count(&self, word: &str) -> usize {
        self.term_frequencies.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.count(word) > 0
    }
}

/// Words of the reference document with their counts.
///
/// Kept sorted so sums over the vocabulary always run in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    words: BTreeMap<String, usize>,
}

impl Vocabulary {
    pub fn from_text(tokenizer: &Tokenizer, text: &str) -> Self {
        Self {
            words: tokenizer.analyze_with_frequencies(text).into_iter().collect(),
        }
    }

    pub fn from_stats(stats: &DocStats) -> Self {
        Self {
            words: stats
                .term_frequencies
                .iter()
                .map(|(word, count)| (word.clone(), *count))
                .collect(),
        }
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    pub fn count(&self, word: &str) -> usize {
        self.words.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|(w, c)| (w.into(), c)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vocabulary() {
        let tokenizer = Tokenizer::new();
        let vocab = Vocabulary::from_text(&tokenizer, "I'd... like, an! apple.");

        let expected: Vocabulary = [("i'd", 1), ("like", 1), ("an", 1), ("apple", 1)]
            .into_iter()
            .collect();
        assert_eq!(vocab, expected);
        assert_eq!(vocab.words().collect::<Vec<_>>(), vec!["an", "apple", "i'd", "like"]);
    }

    #[test]
    fn test_doc_stats() {
        let tokenizer = Tokenizer::new();
        let doc = Document::new(2, "Never compare an apple to an orange.".to_string());
        let stats = DocStats::from_document(&tokenizer, &doc);

        assert_eq!(stats.position, 2);
        assert_eq!(stats.length, 7);
        assert_eq!(stats.count("an"), 2);
        assert_eq!(stats.count("like"), 0);
        assert!(!stats.contains("like"));
        assert_eq!(document_id(doc.position), 3);
    }

    #[test]
    fn test_empty_document_stats() {
        let tokenizer = Tokenizer::new();
        let doc = Document::new(0, "...!".to_string());
        let stats = DocStats::from_document(&tokenizer, &doc);
        assert_eq!(stats.length, 0);
        assert!(stats.term_frequencies.is_empty());
    }

    #[test]
    fn test_vocabulary_from_stats_matches_text() {
        let tokenizer = Tokenizer::new();
        let text = "An apple a day keeps the doctor away.";
        let stats = DocStats::from_document(&tokenizer, &Document::new(0, text.to_string()));
        assert_eq!(Vocabulary::from_stats(&stats), Vocabulary::from_text(&tokenizer, text));
    }
}
