use crate::document::{DocStats, Document, Vocabulary};
use crate::error::{Error, Result};
use crate::index::InvertedIndex;
use crate::ranking::{most_similar_document, rank_documents, ScoredDocument};
use crate::tfidf::{compute_idf, compute_tf, compute_tfidf, IdfVector, TermFrequencyTable, TfIdfTable};
use crate::tokenizer::Tokenizer;
use serde::{Deserialize, Serialize};

/// Every intermediate result of one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityReport {
    pub vocabulary: Vocabulary,
    pub tf: TermFrequencyTable,
    pub idf: IdfVector,
    pub tfidf: TfIdfTable,
    pub ranking: Vec<ScoredDocument>,
    pub most_similar: Option<usize>,
}

/// Runs the TF-IDF similarity pipeline over an ordered set of documents.
///
/// The first document is the reference: its words form the vocabulary and
/// it is never reported as the most similar document.
#[derive(Debug, Clone, Default)]
pub struct SimilarityEngine {
    tokenizer: Tokenizer,
}

impl SimilarityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokenizer(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Run the full pipeline
    pub fn analyze(&self, texts: &[&str]) -> Result<SimilarityReport> {
        let documents = Document::from_texts(texts);

        // Word counts are computed once and shared by the TF and IDF stages
        let stats: Vec<DocStats> = documents
            .iter()
            .map(|doc| DocStats::from_document(&self.tokenizer, doc))
            .collect();

        let reference = stats.first().ok_or(Error::EmptyCorpus)?;
        let vocabulary = Vocabulary::from_stats(reference);
        tracing::debug!(
            documents = documents.len(),
            words = vocabulary.len(),
            "built reference vocabulary"
        );

        let index = InvertedIndex::from_stats(&stats);

        let tf = compute_tf(&vocabulary, &stats);
        let idf = compute_idf(&vocabulary, &index)?;
        let tfidf = compute_tfidf(&vocabulary, &tf, &idf);
        tracing::debug!("computed tf-idf table");

        let ranking = rank_documents(&vocabulary, &tfidf);
        let most_similar = most_similar_document(&vocabulary, &tfidf);
        tracing::debug!(?most_similar, candidates = ranking.len(), "ranked documents");

        Ok(SimilarityReport {
            vocabulary,
            tf,
            idf,
            tfidf,
            ranking,
            most_similar,
        })
    }

    /// Id of the document most similar to the reference document
    pub fn most_similar(&self, texts: &[&str]) -> Result<usize> {
        self.analyze(texts)?
            .most_similar
            .ok_or(Error::NoCandidateDocuments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: [&str; 4] = [
        "I'd... like, an! apple.",
        "An apple a day keeps the doctor away.",
        "Never compare an apple to an orange.",
        "I prefer scikit-learn to orange.",
    ];

    #[test]
    fn test_fixed_corpus() -> Result<()> {
        let engine = SimilarityEngine::new();
        let report = engine.analyze(&CORPUS)?;

        let expected: Vocabulary = [("i'd", 1), ("like", 1), ("an", 1), ("apple", 1)]
            .into_iter()
            .collect();
        assert_eq!(report.vocabulary, expected);

        // "never compare an apple to an orange" carries three of seven words
        let idf = (4.0f64 / 3.0).ln();
        let scores: Vec<(usize, f64)> = report.ranking.iter().map(|d| (d.doc_id, d.score)).collect();
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0].0, 3);
        assert!((scores[0].1 - 3.0 / 7.0 * idf).abs() < 1e-12);
        assert_eq!(scores[1].0, 2);
        assert!((scores[1].1 - 0.25 * idf).abs() < 1e-12);
        assert_eq!(scores[2], (4, 0.0));

        assert_eq!(report.most_similar, Some(3));
        assert_eq!(engine.most_similar(&CORPUS)?, 3);
        Ok(())
    }

    #[test]
    fn test_repeated_runs_agree() -> Result<()> {
        let engine = SimilarityEngine::new();
        let first = engine.analyze(&CORPUS)?;
        let second = engine.analyze(&CORPUS)?;

        assert_eq!(first.tf, second.tf);
        assert_eq!(first.idf, second.idf);
        assert_eq!(first.tfidf, second.tfidf);
        assert_eq!(first.ranking, second.ranking);
        Ok(())
    }

    #[test]
    fn test_empty_corpus() {
        let engine = SimilarityEngine::new();
        assert_eq!(engine.analyze(&[]).err(), Some(Error::EmptyCorpus));
    }

    #[test]
    fn test_single_document() -> Result<()> {
        let engine = SimilarityEngine::new();
        let report = engine.analyze(&["an apple"])?;

        assert_eq!(report.most_similar, None);
        assert_eq!(engine.most_similar(&["an apple"]), Err(Error::NoCandidateDocuments));
        Ok(())
    }

    #[test]
    fn test_empty_candidate_documents() -> Result<()> {
        let engine = SimilarityEngine::new();
        let report = engine.analyze(&["an apple", "", "apple"])?;

        assert!(report.tf.rows().iter().flatten().all(|(_, v)| v.is_finite()));
        assert_eq!(report.most_similar, Some(3));
        Ok(())
    }

    #[test]
    fn test_empty_reference_document() -> Result<()> {
        let engine = SimilarityEngine::new();
        let report = engine.analyze(&["...", "an apple", "an orange"])?;

        assert!(report.vocabulary.is_empty());
        assert_eq!(report.most_similar, Some(3));
        Ok(())
    }

    #[test]
    fn test_custom_tokenizer() -> Result<()> {
        let engine = SimilarityEngine::with_tokenizer(Tokenizer::with_punctuation(['-', '.']));
        let report = engine.analyze(&["scikit-learn", "learn rust.", "scikit learn learn"])?;

        assert_eq!(report.vocabulary.words().collect::<Vec<_>>(), vec!["learn", "scikit"]);
        assert_eq!(report.most_similar, Some(3));
        Ok(())
    }

    #[test]
    fn test_report_serializes() -> anyhow::Result<()> {
        let report = SimilarityEngine::new().analyze(&CORPUS)?;
        let json = serde_json::to_value(&report)?;

        assert_eq!(json["most_similar"], 3);
        assert_eq!(json["vocabulary"]["words"]["apple"], 1);
        assert_eq!(json["tf"]["rows"].as_array().map(|rows| rows.len()), Some(4));
        Ok(())
    }
}
