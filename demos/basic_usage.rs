use tfsim::{SimilarityEngine, Tokenizer};

fn main() -> anyhow::Result<()> {
    println!("=== TFSIM Basic Usage Example ===\n");

    let engine = SimilarityEngine::new();

    let documents = [
        "Rust is a systems programming language that runs blazingly fast.",
        "Go is an open source programming language that makes it easy to build simple software.",
        "Python is a programming language that lets you work quickly.",
        "Rust prevents segfaults and runs fast, Rust guarantees thread safety.",
    ];

    // Example 1: Normalization
    println!("--- Example 1: Normalize the reference document ---");
    println!("{}\n", engine.tokenizer().normalize(documents[0]));

    // Example 2: Full report
    println!("--- Example 2: Score every document against the first ---");
    let report = engine.analyze(&documents)?;

    println!("Reference vocabulary: {} words", report.vocabulary.len());
    for scored in &report.ranking {
        println!("  doc {} -> {:.4}", scored.doc_id, scored.score);
    }

    if let Some(doc_id) = report.most_similar {
        println!("Most similar document: {}", doc_id);
    }

    // Example 3: Inverse document frequencies
    println!("\n--- Example 3: Inverse document frequencies ---");
    for (word, idf) in report.idf.scores() {
        println!("  {:<12} {:.4}", word, idf);
    }

    // Example 4: Custom punctuation
    println!("\n--- Example 4: Split hyphenated words ---");
    let engine = SimilarityEngine::with_tokenizer(Tokenizer::with_punctuation(['.', ',', '-']));
    let doc_id = engine.most_similar(&["scikit-learn rocks.", "learn rust", "scikit, learn, scikit"])?;
    println!("Most similar document: {}", doc_id);

    println!("\n=== Example Complete ===");

    Ok(())
}
