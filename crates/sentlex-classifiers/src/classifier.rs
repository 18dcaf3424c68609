//! Classifier trait and common types

use sentlex_core::Result;
use serde::Serialize;

/// Trait for all classifiers
pub trait Classifier: Send + Sync {
    /// Classify the given text
    fn classify(&self, text: &str) -> Result<ClassificationResult>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Result of classification
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    /// Classification label
    pub label: String,

    /// Sentiment score, nominally in [-1, 1]
    pub score: f64,

    /// Additional metadata
    pub metadata: ClassificationMetadata,

    /// Latency in microseconds
    pub latency_us: u64,
}

impl ClassificationResult {
    /// Create a new classification result
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
            metadata: ClassificationMetadata::default(),
            latency_us: 0,
        }
    }

    /// Polarity implied by the score
    pub fn polarity(&self) -> Polarity {
        Polarity::from_score(self.score)
    }
}

/// Metadata about classification
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassificationMetadata {
    /// Matched lexicon phrases with their weights, bigrams first
    pub matched: Vec<(String, f64)>,

    /// Normalized token string the lexicon was matched against
    pub tokens: Option<String>,

    /// Model name or version
    pub model: Option<String>,
}

/// Sign of a sentiment score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    /// Positive above zero, negative below, neutral at exactly zero
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Self::Positive
        } else if score < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}
