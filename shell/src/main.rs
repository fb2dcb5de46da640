use anyhow::Result;
use clap::Parser;
use engine::SearchEngine;
use shell::{demo_documents, run};
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "shell")]
#[command(about = "Interactive TF-IDF document search", long_about = None)]
struct Args {
    /// Start with an empty corpus instead of the demo documents
    #[arg(long)]
    empty: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let seed = if args.empty { Vec::new() } else { demo_documents() };
    let mut engine = SearchEngine::new(seed);
    tracing::debug!(documents = engine.document_count(), "corpus seeded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut engine, stdin.lock(), stdout.lock())
}
