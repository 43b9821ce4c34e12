use anyhow::Result;
use clap::{Parser, Subcommand};
use ranker::score_corpus;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "ranker")]
#[command(about = "Score a fixed corpus of text documents with TF-IDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index a corpus and write one CSV score table per document
    Score {
        /// Corpus directory of .txt files, or a JSON manifest file
        #[arg(long)]
        input: PathBuf,
        /// Output directory for the per-document score tables
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score { input, output } => score_corpus(&input, &output),
    }
}
