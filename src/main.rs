use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use tfsim::SimilarityEngine;
use tracing_subscriber::EnvFilter;

const DOCUMENTS: [&str; 4] = [
    "I'd... like, an! apple.",
    "An apple a day keeps the doctor away.",
    "Never compare an apple to an orange.",
    "I prefer scikit-learn to orange.",
];

// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Find the document most similar to the first one by TF-IDF", long_about = None)]
struct Args {
    /// Print the full TF-IDF report as JSON instead of the document id
    #[arg(long)]
    report: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Write the document id alone, without label or trailing newline
fn write_id<W: Write>(out: &mut W, doc_id: usize) -> io::Result<()> {
    write!(out, "{}", doc_id)?;
    out.flush()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging();

    let engine = SimilarityEngine::new();
    let mut stdout = std::io::stdout().lock();

    if args.report {
        let report = engine.analyze(&DOCUMENTS)?;
        serde_json::to_writer_pretty(&mut stdout, &report).context("Failed to write report")?;
        writeln!(stdout)?;
        return Ok(());
    }

    let doc_id = engine
        .most_similar(&DOCUMENTS)
        .context("Failed to rank documents")?;
    tracing::info!(doc_id, "most similar document");

    write_id(&mut stdout, doc_id).context("Failed to write document id")?;

    Ok(())
}
