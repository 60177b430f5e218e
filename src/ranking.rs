use crate::document::{document_id, Vocabulary};
use crate::tfidf::TfIdfTable;
use serde::{Deserialize, Serialize};

/// Summed TF-IDF weight of a candidate document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub doc_id: usize,
    pub score: f64,
}

impl ScoredDocument {
    pub fn new(doc_id: usize, score: f64) -> Self {
        Self { doc_id, score }
    }
}

/// Sum of the TF-IDF weights of all reference words in one document
pub fn document_score(vocabulary: &Vocabulary, tfidf: &TfIdfTable, position: usize) -> f64 {
    vocabulary.words().map(|word| tfidf.get(position, word)).sum()
}

/// Score every document except the reference document, in corpus order
fn candidate_scores<'a>(
    vocabulary: &'a Vocabulary,
    tfidf: &'a TfIdfTable,
) -> impl Iterator<Item = ScoredDocument> + 'a {
    (1..tfidf.len()).map(move |position| {
        ScoredDocument::new(document_id(position), document_score(vocabulary, tfidf, position))
    })
}

/// Id of the document most similar to the reference document.
///
/// The running maximum starts at zero and is replaced on `>=`, so a later
/// document wins a tie. Returns `None` when there is no candidate.
pub fn most_similar_document(vocabulary: &Vocabulary, tfidf: &TfIdfTable) -> Option<usize> {
    let mut max_id = None;
    let mut max_score = 0.0;

    for candidate in candidate_scores(vocabulary, tfidf) {
        if candidate.score >= max_score {
            max_score = candidate.score;
            max_id = Some(candidate.doc_id);
        }
    }

    max_id
}

/// Rank all candidate documents by score, later documents first on ties
pub fn rank_documents(vocabulary: &Vocabulary, tfidf: &TfIdfTable) -> Vec<ScoredDocument> {
    let mut scored_docs: Vec<ScoredDocument> = candidate_scores(vocabulary, tfidf).collect();

    scored_docs.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(b.doc_id.cmp(&a.doc_id))
    });

    scored_docs
}
