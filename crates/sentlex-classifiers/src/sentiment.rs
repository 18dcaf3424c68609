//! Lexicon sentiment classifier
//!
//! Wraps [`SentimentScorer`] in the [`Classifier`] interface, labelling the
//! score by its sign.

use crate::classifier::{ClassificationMetadata, ClassificationResult, Classifier, Polarity};
use crate::config::LexiconConfig;
use crate::lexicon::LexiconStore;
use crate::scorer::SentimentScorer;
use sentlex_core::Result;
use std::sync::Arc;
use std::time::Instant;

pub struct SentimentClassifier {
    name: String,
    scorer: SentimentScorer,
}

impl SentimentClassifier {
    pub fn new(lexicon: Arc<LexiconStore>) -> Self {
        Self::with_name("sentiment", lexicon)
    }

    pub fn with_name(name: impl Into<String>, lexicon: Arc<LexiconStore>) -> Self {
        Self::from_scorer(name, SentimentScorer::new(lexicon))
    }

    pub fn from_scorer(name: impl Into<String>, scorer: SentimentScorer) -> Self {
        Self {
            name: name.into(),
            scorer,
        }
    }

    /// Load the lexicon described by `config` and wrap it
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        let lexicon = LexiconStore::load(config)?;
        Ok(Self::new(Arc::new(lexicon)))
    }

    pub fn scorer(&self) -> &SentimentScorer {
        &self.scorer
    }
}

impl Classifier for SentimentClassifier {
    fn classify(&self, text: &str) -> Result<ClassificationResult> {
        let start = Instant::now();

        let breakdown = self.scorer.score_detailed(text);
        let label = Polarity::from_score(breakdown.score).as_str();

        let matched = breakdown
            .hits()
            .map(|hit| (hit.phrase.clone(), hit.weight))
            .collect();

        Ok(ClassificationResult {
            label: label.to_string(),
            score: breakdown.score,
            metadata: ClassificationMetadata {
                matched,
                tokens: Some(breakdown.tokens),
                model: Some("sentiment-lexicon".to_string()),
            },
            latency_us: start.elapsed().as_micros() as u64,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
