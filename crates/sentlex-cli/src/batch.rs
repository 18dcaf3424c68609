//! Batch scoring of CSV tables
//!
//! Reads every row, scores the text column on a rayon pool and writes the
//! table back out with a score column. Row order is preserved.

use crate::config::BatchConfig;
use anyhow::{Context, Result};
use rayon::prelude::*;
use sentlex_classifiers::SentimentScorer;
use std::io::{Read, Write};
use std::time::Instant;
use tracing::{debug, info};

/// Outcome of a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Rows scored
    pub rows: usize,

    /// Rows with at least one lexicon hit
    pub matched: usize,
}

/// Score every row of `input` and write the result to `output`.
///
/// An existing score column is overwritten in place, otherwise one is
/// appended.
pub fn run<R: Read, W: Write>(
    input: R,
    output: W,
    scorer: &SentimentScorer,
    config: &BatchConfig,
) -> Result<BatchSummary> {
    let start = Instant::now();

    let mut reader = csv::Reader::from_reader(input);
    let mut headers = reader.headers().context("Failed to read input header")?.clone();

    let text_idx = headers
        .iter()
        .position(|h| h == config.text_column)
        .with_context(|| format!("Input has no '{}' column", config.text_column))?;

    let score_idx = headers.iter().position(|h| h == config.score_column);
    if score_idx.is_none() {
        headers.push_field(&config.score_column);
    }

    let records = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("Failed to read input rows")?;

    let threads = config.worker_threads();
    debug!(rows = records.len(), threads, "Scoring batch");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to build scoring thread pool")?;

    let scores: Vec<(f64, bool)> = pool.install(|| {
        records
            .par_iter()
            .map(|record| {
                let breakdown = scorer.score_detailed(record.get(text_idx).unwrap_or_default());
                (breakdown.score, breakdown.match_count() > 0)
            })
            .collect()
    });

    let mut writer = csv::Writer::from_writer(output);
    writer
        .write_record(&headers)
        .context("Failed to write output header")?;

    for (record, (score, _)) in records.iter().zip(&scores) {
        let score = score.to_string();
        let row: csv::StringRecord = match score_idx {
            Some(idx) => record
                .iter()
                .enumerate()
                .map(|(i, field)| if i == idx { score.as_str() } else { field })
                .collect(),
            None => record.iter().chain(std::iter::once(score.as_str())).collect(),
        };
        writer.write_record(&row).context("Failed to write output row")?;
    }
    writer.flush().context("Failed to flush output")?;

    let summary = BatchSummary {
        rows: records.len(),
        matched: scores.iter().filter(|(_, matched)| *matched).count(),
    };

    info!(
        rows = summary.rows,
        matched = summary.matched,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Batch scored"
    );

    Ok(summary)
}
