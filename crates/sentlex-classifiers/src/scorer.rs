//! Bigram/unigram lexicon scorer
//!
//! Bigrams are matched first. Each matched bigram is cut out of the working
//! token string so its words are not counted again as unigrams. The score is
//! the mean weight of every hit, or exactly 0 when nothing matched.

use crate::lexicon::LexiconStore;
use crate::tokenizer::{default_tokenizer, Tokenizer};
use serde::Serialize;
use std::sync::Arc;

/// Score text against a lexicon with the default tokenizer
pub fn score(text: &str, lexicon: &LexiconStore) -> f64 {
    score_with(default_tokenizer(), lexicon, text).score
}

/// A lexicon phrase found in the text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GramHit {
    pub phrase: String,
    pub weight: f64,
}

impl GramHit {
    fn new(phrase: impl Into<String>, weight: f64) -> Self {
        Self {
            phrase: phrase.into(),
            weight,
        }
    }
}

/// Score along with the tokens and hits it was computed from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Mean hit weight, 0 when there were no hits
    pub score: f64,

    /// Tokenizer output
    pub tokens: String,

    /// Bigram hits in text order
    pub bigram_hits: Vec<GramHit>,

    /// Unigram hits in text order, after bigram removal
    pub unigram_hits: Vec<GramHit>,
}

impl ScoreBreakdown {
    /// Total number of lexicon hits
    pub fn match_count(&self) -> usize {
        self.bigram_hits.len() + self.unigram_hits.len()
    }

    /// All hits, bigrams first
    pub fn hits(&self) -> impl Iterator<Item = &GramHit> {
        self.bigram_hits.iter().chain(&self.unigram_hits)
    }
}

/// Scorer bound to a loaded lexicon.
///
/// Holds no mutable state; share one instance across threads.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    tokenizer: Tokenizer,
    lexicon: Arc<LexiconStore>,
}

impl SentimentScorer {
    /// Scorer using the default tokenizer
    pub fn new(lexicon: Arc<LexiconStore>) -> Self {
        Self::with_tokenizer(default_tokenizer().clone(), lexicon)
    }

    pub fn with_tokenizer(tokenizer: Tokenizer, lexicon: Arc<LexiconStore>) -> Self {
        Self { tokenizer, lexicon }
    }

    /// Sentiment score, nominally in [-1, 1]
    pub fn score(&self, text: &str) -> f64 {
        self.score_detailed(text).score
    }

    pub fn score_detailed(&self, text: &str) -> ScoreBreakdown {
        score_with(&self.tokenizer, &self.lexicon, text)
    }

    pub fn lexicon(&self) -> &LexiconStore {
        &self.lexicon
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}

fn score_with(tokenizer: &Tokenizer, lexicon: &LexiconStore, text: &str) -> ScoreBreakdown {
    let tokens = tokenizer.tokenize(text);
    let words: Vec<&str> = tokens.split_whitespace().collect();

    // Bigrams come from the untouched token list; removal below only
    // affects which unigrams are left.
    let mut remaining = tokens.clone();
    let mut bigram_hits = Vec::new();
    for pair in words.windows(2) {
        let bigram = format!("{} {}", pair[0], pair[1]);
        if let Some(weight) = lexicon.lookup(&bigram) {
            // Substring removal: with repeated text this may cut a different
            // occurrence than the one that matched.
            remaining = remaining.replacen(&bigram, "", 1);
            bigram_hits.push(GramHit::new(bigram, weight));
        }
    }

    let unigram_hits: Vec<GramHit> = remaining
        .split_whitespace()
        .filter_map(|word| lexicon.lookup(word).map(|weight| GramHit::new(word, weight)))
        .collect();

    let (sum, count) = bigram_hits
        .iter()
        .chain(&unigram_hits)
        .fold((0.0, 0usize), |(sum, count), hit| (sum + hit.weight, count + 1));

    let score = if count == 0 { 0.0 } else { sum / count as f64 };

    ScoreBreakdown {
        score,
        tokens,
        bigram_hits,
        unigram_hits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> LexiconStore {
        LexiconStore::from_entries([("good", 1.0), ("bad", -1.0), ("not good", -0.5)])
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_no_match_scores_zero() {
        assert_eq!(score("nothing to see here", &lexicon()), 0.0);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let breakdown = score_with(default_tokenizer(), &lexicon(), "");
        assert_eq!(breakdown.score, 0.0);
        assert_eq!(breakdown.tokens, "");
        assert_eq!(breakdown.match_count(), 0);
    }

    #[test]
    fn test_unigram_mean() {
        assert_close(score("good good bad", &lexicon()), 1.0 / 3.0);
    }

    #[test]
    fn test_negated_phrase_not_double_counted() {
        let breakdown = score_with(default_tokenizer(), &lexicon(), "this is not good");
        assert_close(breakdown.score, -0.5);
        assert_eq!(breakdown.match_count(), 1);
        assert!(breakdown.hits().all(|hit| hit.phrase != "good"));
    }

    #[test]
    fn test_bigram_removed_before_unigrams() {
        let store = LexiconStore::from_entries([("good", 1.0), ("very good", 0.9)]);
        let breakdown = score_with(default_tokenizer(), &store, "very good");

        assert_eq!(breakdown.bigram_hits, vec![GramHit::new("very good", 0.9)]);
        assert!(breakdown.unigram_hits.is_empty());
        assert_close(breakdown.score, 0.9);
    }

    #[test]
    fn test_overlapping_bigrams_all_counted() {
        let store = LexiconStore::from_entries([("moon soon", 0.6), ("go moon", 0.2)]);
        // "the" is a stop word, so tokens are "go moon soon"
        let breakdown = score_with(default_tokenizer(), &store, "go the moon soon");

        assert_eq!(breakdown.tokens, "go moon soon ");
        assert_eq!(breakdown.bigram_hits.len(), 2);
        assert_close(breakdown.score, 0.4);
    }

    #[test]
    fn test_first_textual_occurrence_is_removed() {
        let store = LexiconStore::from_entries([("good day", 0.4), ("good", 1.0), ("day", -1.0)]);
        // "good day" is a prefix of "good dayx good", so the first cut
        // leaves "x good day" behind.
        let breakdown = score_with(default_tokenizer(), &store, "good dayx good day");

        assert_eq!(breakdown.bigram_hits.len(), 1);
        let unigrams: Vec<_> = breakdown.unigram_hits.iter().map(|h| h.phrase.as_str()).collect();
        assert_eq!(unigrams, vec!["good", "day"]);
        assert_close(breakdown.score, 0.4 / 3.0);
    }

    #[test]
    fn test_tag_weights() {
        let store = LexiconStore::from_entries([("emojineg", -0.8), ("sad", -0.6), ("numbertag", 0.1)]);

        assert_close(score("I'm sad :(", &store), -0.7);
        assert_close(score("$45.67", &store), 0.1);
        assert_close(score("(12)", &store), 0.1);
    }

    #[test]
    fn test_scorer_matches_free_function() {
        let store = Arc::new(lexicon());
        let scorer = SentimentScorer::new(store.clone());
        for text in ["good", "not bad at all", "", "@bob :) good"] {
            assert_eq!(scorer.score(text), score(text, &store));
        }
    }

    #[test]
    fn test_weights_are_not_clamped() {
        let store = LexiconStore::from_entries([("moon", 4.0)]);
        assert_close(score("moon", &store), 4.0);
    }
}
