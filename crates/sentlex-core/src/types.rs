//! Core types for sentlex

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scored keyword or phrase from the lexicon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Phrase text as it appears in the lexicon source
    pub phrase: String,

    /// Sentiment weight, nominally in [-1, 1]
    pub weight: f64,

    /// Number of whitespace-separated words in the phrase
    pub gram_length: usize,
}

impl LexiconEntry {
    /// Create a new entry, deriving the gram length from the phrase
    pub fn new(phrase: impl Into<String>, weight: f64) -> Self {
        let phrase = phrase.into();
        let gram_length = phrase.split_whitespace().count();
        Self {
            phrase,
            weight,
            gram_length,
        }
    }

    /// Single-word entry
    pub fn is_unigram(&self) -> bool {
        self.gram_length == 1
    }

    /// Two-word entry
    pub fn is_bigram(&self) -> bool {
        self.gram_length == 2
    }
}

/// Canonical placeholder substituted for a class of surface forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    /// Numbers and prices, including parenthesized amounts
    Number,
    /// Ticker symbols such as `$aapl`
    Cashtag,
    /// User mentions such as `@alice`
    User,
    /// URLs
    Link,
    /// Positive emoticons
    EmojiPos,
    /// Negative emoticons
    EmojiNeg,
    /// Negation words; fused onto the following token
    Negation,
}

impl Tag {
    /// Literal token text for this tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "numbertag",
            Self::Cashtag => "cashtag",
            Self::User => "usertag",
            Self::Link => "linktag",
            Self::EmojiPos => "emojipos",
            Self::EmojiNeg => "emojineg",
            Self::Negation => "negtag_",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token after tag substitution
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaggedToken {
    /// Replaced by a canonical tag
    Tag(Tag),
    /// Kept as a (lowercased, unless emoticon) word
    Word(String),
}

impl TaggedToken {
    /// Token text as it appears in the joined token string
    pub fn as_str(&self) -> &str {
        match self {
            Self::Tag(tag) => tag.as_str(),
            Self::Word(word) => word,
        }
    }

    /// Returns the tag if this token was substituted
    pub fn tag(&self) -> Option<Tag> {
        match self {
            Self::Tag(tag) => Some(*tag),
            Self::Word(_) => None,
        }
    }
}

impl fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
