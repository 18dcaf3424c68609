//! sentlex Classifiers
//!
//! Lexicon-based sentiment scoring for short social-media texts.
//!
//! Text goes through the [`Tokenizer`], which normalizes it into a token
//! string with canonical tags for numbers, cashtags, mentions, links,
//! emoticons and negations. The [`SentimentScorer`] then matches bigrams and
//! unigrams against a [`LexiconStore`] and averages the matched weights.
//!
//! ```no_run
//! use sentlex_classifiers::{score, LexiconConfig, LexiconStore};
//!
//! let lexicon = LexiconStore::load(&LexiconConfig::with_path("lexicons/l1.csv"))?;
//! let sentiment = score("$AAPL is not looking good :(", &lexicon);
//! # Ok::<(), sentlex_core::Error>(())
//! ```

pub mod classifier;
pub mod config;
pub mod lexicon;
pub mod scorer;
pub mod sentiment;
pub mod tokenizer;

pub use classifier::{ClassificationMetadata, ClassificationResult, Classifier, Polarity};
pub use config::LexiconConfig;
pub use lexicon::LexiconStore;
pub use scorer::{score, GramHit, ScoreBreakdown, SentimentScorer};
pub use sentiment::SentimentClassifier;
pub use tokenizer::{default_tokenizer, tokenize, Tokenizer};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{ClassificationResult, Classifier, Polarity};
    pub use crate::lexicon::LexiconStore;
    pub use crate::scorer::{score, SentimentScorer};
    pub use crate::sentiment::SentimentClassifier;
    pub use crate::tokenizer::Tokenizer;
}
