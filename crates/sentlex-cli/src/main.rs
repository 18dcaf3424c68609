//! sentlex CLI
//!
//! Scores social-media posts against a sentiment lexicon, either one text at
//! a time or as a CSV batch spread over all cores.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sentlex_classifiers::{Classifier, LexiconStore, SentimentClassifier, SentimentScorer, Tokenizer};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

mod batch;
mod config;

use config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "sentlex")]
#[command(author, version, about = "Lexicon-based sentiment scoring for short texts", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "sentlex.yaml")]
    config: String,

    /// Lexicon CSV path (overrides the configuration file)
    #[arg(short, long, global = true, env = "SENTLEX_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score every row of a CSV table
    Batch {
        /// Input CSV path, `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Output CSV path, `-` for stdout
        #[arg(short, long, default_value = "-")]
        output: String,

        /// Column holding the text
        #[arg(long)]
        text_column: Option<String>,

        /// Column receiving the score
        #[arg(long)]
        score_column: Option<String>,

        /// Worker threads
        #[arg(short = 'j', long)]
        threads: Option<usize>,
    },

    /// Score a single text
    Score {
        /// Text to score
        text: String,

        /// Print tokens, matched phrases and label as JSON
        #[arg(long)]
        explain: bool,
    },

    /// Print the normalized token string for a text
    Tokenize {
        /// Text to tokenize
        text: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = AppConfig::load(&cli.config, &cli)
        .with_context(|| format!("Failed to load configuration from {}", cli.config))?;

    match &cli.command {
        Commands::Tokenize { text } => {
            let tokenizer = Tokenizer::new()?;
            println!("{}", tokenizer.tokenize(text));
        }

        Commands::Score { text, explain } => {
            let lexicon = load_lexicon(&config)?;
            let classifier = SentimentClassifier::new(lexicon);
            let result = classifier.classify(text)?;

            if *explain {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.score);
            }
        }

        Commands::Batch { input, output, .. } => {
            let lexicon = load_lexicon(&config)?;
            let scorer = SentimentScorer::new(lexicon);

            batch::run(open_input(input)?, open_output(output)?, &scorer, &config.batch)?;
        }
    }

    Ok(())
}

/// Load the lexicon once, before any scoring
fn load_lexicon(config: &AppConfig) -> Result<Arc<LexiconStore>> {
    info!("Loading lexicon from {}", config.lexicon.path.display());
    let lexicon = LexiconStore::load(&config.lexicon)
        .with_context(|| format!("Failed to load lexicon {}", config.lexicon.path.display()))?;
    Ok(Arc::new(lexicon))
}

fn open_input(path: &str) -> Result<Box<dyn Read>> {
    if path == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).with_context(|| format!("Failed to open input {path}"))?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_output(path: &str) -> Result<Box<dyn Write>> {
    if path == "-" {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    }
    let file = File::create(path).with_context(|| format!("Failed to create output {path}"))?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("sentlex=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sentlex=info"))
    };

    // stdout carries results, logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
