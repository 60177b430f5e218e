use crate::document::{DocStats, Vocabulary};
use crate::error::{Error, Result};
use crate::index::InvertedIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reference word -> score
pub type WordScores = BTreeMap<String, f64>;

/// One row of word scores per document, aligned with document positions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    rows: Vec<WordScores>,
}

pub type TermFrequencyTable = ScoreTable;
pub type TfIdfTable = ScoreTable;

impl ScoreTable {
    pub fn rows(&self) -> &[WordScores] {
        &self.rows
    }

    pub fn row(&self, position: usize) -> Option<&WordScores> {
        self.rows.get(position)
    }

    /// Score of `word` in the document at `position`; missing cells are zero
    pub fn get(&self, position: usize, word: &str) -> f64 {
        self.rows
            .get(position)
            .and_then(|row| row.get(word))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<WordScores> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = WordScores>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Inverse document frequency of every reference word
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdfVector {
    scores: WordScores,
}

impl IdfVector {
    pub fn get(&self, word: &str) -> f64 {
        self.scores.get(word).copied().unwrap_or(0.0)
    }

    pub fn scores(&self) -> &WordScores {
        &self.scores
    }
}

/// Term frequency of each reference word in each document.
///
/// The denominator is the document's total word count, reference or not.
/// Every frequency of an empty document is zero.
pub fn compute_tf(vocabulary: &Vocabulary, stats: &[DocStats]) -> TermFrequencyTable {
    stats
        .iter()
        .map(|doc| {
            tracing::trace!(position = doc.position, length = doc.length, "term frequencies");
            vocabulary
                .words()
                .map(|word| {
                    let tf = if doc.length == 0 {
                        0.0
                    } else {
                        doc.count(word) as f64 / doc.length as f64
                    };
                    (word.to_string(), tf)
                })
                .collect::<WordScores>()
        })
        .collect()
}

/// `ln(N / df)` for each reference word.
///
/// Fails with [`Error::UnobservedWord`] when a word occurs in no document.
pub fn compute_idf(vocabulary: &Vocabulary, index: &InvertedIndex) -> Result<IdfVector> {
    let total_docs = index.total_documents() as f64;
    let mut scores = WordScores::new();

    for word in vocabulary.words() {
        let doc_freq = index.doc_frequency(word);
        if doc_freq == 0 {
            return Err(Error::UnobservedWord(word.to_string()));
        }

        let idf = (total_docs / doc_freq as f64).ln();
        tracing::trace!(word, doc_freq, idf, "inverse document frequency");
        scores.insert(word.to_string(), idf);
    }

    Ok(IdfVector { scores })
}

/// Multiply TF by IDF for every reference word and document
pub fn compute_tfidf(vocabulary: &Vocabulary, tf: &TermFrequencyTable, idf: &IdfVector) -> TfIdfTable {
    (0..tf.len())
        .map(|position| {
            vocabulary
                .words()
                .map(|word| {
                    let term_freq = tf.get(position, word);
                    let inverse = idf.get(word);
                    let score = if term_freq == 0.0 || inverse == 0.0 {
                        0.0
                    } else {
                        term_freq * inverse
                    };
                    (word.to_string(), score)
                })
                .collect::<WordScores>()
        })
        .collect()
}
