//! Tweet tokenizer
//!
//! Turns raw post text into the space-joined token string the lexicon is
//! matched against. The stages run in a fixed order and the order matters:
//!
//! 1. segmentation with one leftmost-first alternation
//! 2. lowercasing, except strict emoticons which keep their case
//! 3. stop-word removal
//! 4. tag substitution (numbers, cashtags, mentions, URLs, emoticons, negations)
//! 5. join, fuse `negtag_` onto the next token, residual stop-word cleanup
//!
//! Stage 5 works on the joined string, not the token list. Lexicon weights
//! were tuned against its exact output, quirks included.

use once_cell::sync::Lazy;
use regex::Regex;
use sentlex_core::{Result, Tag, TaggedToken};

/// Tokens dropped before tagging
pub const STOP_WORDS: &[&str] = &["an", "a", "the"];

/// Emoticons mapped to [`Tag::EmojiPos`]
pub const POSITIVE_EMOTICONS: &[&str] = &[";)", ":)", ":-)", "=)", ":D"];

/// Emoticons mapped to [`Tag::EmojiNeg`]
pub const NEGATIVE_EMOTICONS: &[&str] = &[":(", ":-(", "=("];

/// Words mapped to [`Tag::Negation`]
pub const NEGATION_WORDS: &[&str] = &["not", "no", "none", "neither", "never", "nobody"];

/// Substrings removed from the fused string, in this order
const RESIDUAL_STOP_WORDS: &[&str] = &[" an ", " a ", " the "];

const NEGATION_GAP: &str = "negtag_ ";

const HASHTAG: &str = r"#+[\w_]+[\w'_\-.]*[\w_]+";
const CASHTAG: &str = r"\$\w+[._]?\w*";
const HTML_TAG: &str = r"<[^>]+>";
const MENTION: &str = r"@[\w_]+[\w'_]*[\w_]";
const URL: &str = r"http[s]?://(?:[a-z]|[0-9]|[$-_@.&amp;+]|[!*\(\),]|(?:%[0-9a-f][0-9a-f]))+";
const OTHER_WORD: &str = r"(?:[\w_][\w'_\-./]*[\w_])+";
const ANY: &str = r"\S+";

// eyes, optional nose, mouth
const EMOTICON: &str = r"[:=;][oO\-]?[D\)\]\(\]/\\OpP]";
// optional sign/currency/paren prefix, digit groups, decimals, trailing paren
const NUMBER: &str = r"[\-\+\.$\(]*?(?:\d+,?)+(?:\.?\d+\(?)?";

static DEFAULT_TOKENIZER: Lazy<Tokenizer> = Lazy::new(Tokenizer::default);

/// Shared tokenizer with the built-in patterns
pub fn default_tokenizer() -> &'static Tokenizer {
    &DEFAULT_TOKENIZER
}

/// Tokenize with the shared default tokenizer
pub fn tokenize(text: &str) -> String {
    DEFAULT_TOKENIZER.tokenize(text)
}

/// Compiled tokenizer patterns.
///
/// Cloning is cheap; compiled regexes are reference counted.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    segmenter: Regex,
    emoticon: Regex,
    number: Regex,
    cashtag: Regex,
    mention: Regex,
    url: Regex,
}

impl Tokenizer {
    /// Compile the tokenizer patterns
    pub fn new() -> Result<Self> {
        let alternation = [HASHTAG, CASHTAG, HTML_TAG, MENTION, URL, OTHER_WORD, ANY].join("|");

        Ok(Self {
            segmenter: compile("segmenter", &format!("(?i){alternation}"))?,
            emoticon: compile("emoticon", &format!("(?i)^(?:{EMOTICON})$"))?,
            number: compile("number", &format!("^(?:{NUMBER})"))?,
            cashtag: compile("cashtag", &format!("^(?:{CASHTAG})"))?,
            mention: compile("mention", &format!("^(?:{MENTION})"))?,
            url: compile("url", &format!("^(?:{URL})"))?,
        })
    }

    /// Split raw text into token candidates.
    ///
    /// Matches are non-overlapping and taken left to right; at each position
    /// the first alternative that matches wins. Whitespace is the only input
    /// that never ends up in a candidate.
    pub fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.segmenter.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Segment, case-fold, drop stop words and substitute tags
    pub fn tagged_tokens(&self, text: &str) -> Vec<TaggedToken> {
        self.segmenter
            .find_iter(text)
            .map(|m| self.fold_case(m.as_str()))
            .filter(|token| !STOP_WORDS.contains(&token.as_str()))
            .map(|token| self.tag(token))
            .collect()
    }

    /// Full pipeline: the token string handed to the scorer.
    ///
    /// Tokens are separated by single spaces and the string ends with a
    /// space unless the last token was a fused negation. Empty input gives
    /// an empty string.
    pub fn tokenize(&self, text: &str) -> String {
        let tokens = self.tagged_tokens(text);
        if tokens.is_empty() {
            return String::new();
        }

        let mut joined = tokens
            .iter()
            .map(TaggedToken::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        joined.push(' ');

        let fused = joined.replace(NEGATION_GAP, Tag::Negation.as_str());

        RESIDUAL_STOP_WORDS
            .iter()
            .fold(fused, |acc, stop| acc.replace(*stop, " "))
    }

    /// Whether the candidate is a strict emoticon such as `:-(`
    pub fn is_emoticon(&self, token: &str) -> bool {
        self.emoticon.is_match(token)
    }

    fn fold_case(&self, candidate: &str) -> String {
        if self.is_emoticon(candidate) {
            candidate.to_string()
        } else {
            candidate.to_lowercase()
        }
    }

    fn tag(&self, token: String) -> TaggedToken {
        match self.classify(&token) {
            Some(tag) => TaggedToken::Tag(tag),
            None => TaggedToken::Word(token),
        }
    }

    // First rule that fires wins; a tag literal never matches a later rule.
    fn classify(&self, token: &str) -> Option<Tag> {
        if self.number.is_match(token) {
            Some(Tag::Number)
        } else if self.cashtag.is_match(token) {
            Some(Tag::Cashtag)
        } else if self.mention.is_match(token) {
            Some(Tag::User)
        } else if self.url.is_match(token) {
            Some(Tag::Link)
        } else if NEGATIVE_EMOTICONS.contains(&token) {
            Some(Tag::EmojiNeg)
        } else if POSITIVE_EMOTICONS.contains(&token) {
            Some(Tag::EmojiPos)
        } else if NEGATION_WORDS.contains(&token) {
            Some(Tag::Negation)
        } else {
            None
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new().expect("Failed to compile built-in tokenizer patterns")
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        sentlex_core::Error::tokenizer(format!("Failed to compile {name} pattern: {e}"))
    })
}
