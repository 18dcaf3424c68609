//! Lexicon store
//!
//! Read-only phrase → weight table, loaded once before any scoring starts
//! and shared between scorers behind an `Arc`.

use crate::config::LexiconConfig;
use crate::tokenizer::{default_tokenizer, Tokenizer, NEGATION_WORDS};
use sentlex_core::{LexiconEntry, LoadError, Result, Tag};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use tracing::{debug, info, warn};

/// Exact-match lexicon of scored keywords and phrases
#[derive(Debug, Clone, Default)]
pub struct LexiconStore {
    /// Entries in source order, first occurrence of each phrase only
    entries: Vec<LexiconEntry>,

    /// Phrase (or negation alias) to entry position
    index: HashMap<String, usize>,

    /// Number of index keys that are negation aliases
    alias_count: usize,
}

impl LexiconStore {
    /// Load the CSV lexicon described by `config`
    pub fn load(config: &LexiconConfig) -> Result<Self> {
        let file = File::open(&config.path).map_err(|source| LoadError::Source {
            path: config.path.clone(),
            source,
        })?;

        let store = Self::from_reader(file, config)?;

        info!(
            path = %config.path.display(),
            entries = store.len(),
            aliases = store.alias_count,
            "Lexicon loaded"
        );

        Ok(store)
    }

    /// Parse a CSV lexicon from any reader.
    ///
    /// The header row must contain `config.keyword_column` and
    /// `config.weight_column`; other columns are ignored.
    pub fn from_reader<R: Read>(reader: R, config: &LexiconConfig) -> Result<Self> {
        config.validate()?;

        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers().map_err(LoadError::from)?.clone();
        let keyword_idx = column_index(&headers, &config.keyword_column)?;
        let weight_idx = column_index(&headers, &config.weight_column)?;

        let mut pairs = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(LoadError::from)?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let phrase = record.get(keyword_idx).unwrap_or_default();
            let raw_weight = record.get(weight_idx).unwrap_or_default();

            let weight = raw_weight
                .parse::<f64>()
                .map_err(|_| LoadError::InvalidWeight {
                    line,
                    phrase: phrase.to_string(),
                    value: raw_weight.to_string(),
                })?;

            pairs.push((phrase.to_string(), weight));
        }

        let tokenizer = config.negation_aliases.then(default_tokenizer);
        Ok(Self::build(pairs, tokenizer))
    }

    /// Build from in-memory pairs, with negation aliases
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self::build(
            entries.into_iter().map(|(p, w)| (p.into(), w)),
            Some(default_tokenizer()),
        )
    }

    /// Build from in-memory pairs, indexing exact phrases only
    pub fn from_entries_exact<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self::build(entries.into_iter().map(|(p, w)| (p.into(), w)), None)
    }

    fn build(pairs: impl IntoIterator<Item = (String, f64)>, tokenizer: Option<&Tokenizer>) -> Self {
        let mut entries: Vec<LexiconEntry> = Vec::new();
        let mut index = HashMap::new();

        for (phrase, weight) in pairs {
            if phrase.trim().is_empty() {
                warn!(weight, "Skipping lexicon row with empty phrase");
                continue;
            }

            match index.entry(phrase) {
                Entry::Occupied(slot) => {
                    warn!(phrase = %slot.key(), "Duplicate lexicon phrase, keeping first weight");
                }
                Entry::Vacant(slot) => {
                    entries.push(LexiconEntry::new(slot.key().clone(), weight));
                    slot.insert(entries.len() - 1);
                }
            }
        }

        // Exact phrases are all indexed before any alias so they always win.
        let mut alias_count = 0;
        if let Some(tokenizer) = tokenizer {
            for (position, entry) in entries.iter().enumerate() {
                let Some(alias) = negation_alias(tokenizer, entry) else {
                    continue;
                };
                if let Entry::Vacant(slot) = index.entry(alias) {
                    slot.insert(position);
                    alias_count += 1;
                }
            }
        }

        let unigrams = entries.iter().filter(|entry| entry.is_unigram()).count();
        let bigrams = entries.iter().filter(|entry| entry.is_bigram()).count();
        debug!(
            unigrams,
            bigrams,
            longer = entries.len() - unigrams - bigrams,
            aliases = alias_count,
            "Lexicon indexed"
        );

        Self {
            entries,
            index,
            alias_count,
        }
    }

    /// Weight of an exact phrase (or negation alias)
    pub fn lookup(&self, phrase: &str) -> Option<f64> {
        self.get(phrase).map(|entry| entry.weight)
    }

    /// Whether the phrase is indexed
    pub fn contains(&self, phrase: &str) -> bool {
        self.index.contains_key(phrase)
    }

    /// Entry for an exact phrase (or negation alias)
    pub fn get(&self, phrase: &str) -> Option<&LexiconEntry> {
        self.index.get(phrase).map(|&position| &self.entries[position])
    }

    /// Number of distinct phrases
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of negation aliases in the index
    pub fn alias_count(&self) -> usize {
        self.alias_count
    }

    /// Entries in source order
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Longest phrase, in words
    pub fn max_gram_length(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.gram_length)
            .max()
            .unwrap_or(0)
    }
}

/// `negtag_<word>` key for a `<negation> <word>` phrase.
///
/// The tokenizer fuses a negation onto the following token, so such a
/// phrase never survives as a bigram. Only a plain lowercase word that the
/// tokenizer passes through untouched qualifies as `<word>`.
fn negation_alias(tokenizer: &Tokenizer, entry: &LexiconEntry) -> Option<String> {
    if !entry.is_bigram() {
        return None;
    }

    let (head, word) = entry.phrase.split_once(' ')?;
    if !NEGATION_WORDS.contains(&head) {
        return None;
    }

    match tokenizer.tagged_tokens(word).as_slice() {
        [token] if token.tag().is_none() && token.as_str() == word => {
            Some(format!("{}{word}", Tag::Negation))
        }
        _ => None,
    }
}

fn column_index(headers: &csv::StringRecord, column: &str) -> std::result::Result<usize, LoadError> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| LoadError::missing_column(column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentlex_core::Error;

    fn config() -> LexiconConfig {
        LexiconConfig::default()
    }

    #[test]
    fn test_from_reader() {
        let csv = "keyword,sw\ngood,1.0\nnot good,-0.5\nbad,-1\n";
        let store = LexiconStore::from_reader(csv.as_bytes(), &config()).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.lookup("good"), Some(1.0));
        assert_eq!(store.lookup("not good"), Some(-0.5));
        assert_eq!(store.lookup("bad"), Some(-1.0));
        assert_eq!(store.lookup("Good"), None);
        assert!(!store.contains("goo"));
        assert_eq!(store.max_gram_length(), 2);
    }

    #[test]
    fn test_extra_columns_and_order() {
        let csv = "id,sw,keyword,source\n1,0.7,bullish,manual\n2,-0.7,bearish,manual\n";
        let store = LexiconStore::from_reader(csv.as_bytes(), &config()).unwrap();

        let phrases: Vec<_> = store.entries().iter().map(|e| e.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["bullish", "bearish"]);
        assert_eq!(store.lookup("bearish"), Some(-0.7));
    }

    #[test]
    fn test_custom_column_names() {
        let config = LexiconConfig {
            keyword_column: "phrase".to_string(),
            weight_column: "score".to_string(),
            ..LexiconConfig::default()
        };
        let csv = "phrase,score\nmoon,0.9\n";
        let store = LexiconStore::from_reader(csv.as_bytes(), &config).unwrap();
        assert_eq!(store.lookup("moon"), Some(0.9));
    }

    #[test]
    fn test_missing_column() {
        let csv = "keyword,weight\ngood,1.0\n";
        let err = LexiconStore::from_reader(csv.as_bytes(), &config()).unwrap_err();
        assert!(matches!(
            err,
            Error::Load(LoadError::MissingColumn { ref column }) if column == "sw"
        ));
    }

    #[test]
    fn test_empty_source_has_no_columns() {
        let err = LexiconStore::from_reader("".as_bytes(), &config()).unwrap_err();
        assert!(matches!(err, Error::Load(LoadError::MissingColumn { .. })));
    }

    #[test]
    fn test_invalid_weight() {
        let csv = "keyword,sw\ngood,1.0\nbad,very\n";
        let err = LexiconStore::from_reader(csv.as_bytes(), &config()).unwrap_err();
        match err {
            Error::Load(LoadError::InvalidWeight { line, phrase, value }) => {
                assert_eq!(line, 3);
                assert_eq!(phrase, "bad");
                assert_eq!(value, "very");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let csv = "keyword,sw\ngood,1.0,extra\n";
        let err = LexiconStore::from_reader(csv.as_bytes(), &config()).unwrap_err();
        assert!(matches!(err, Error::Load(LoadError::Csv(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = LexiconConfig {
            weight_column: "keyword".to_string(),
            ..LexiconConfig::default()
        };
        let err = LexiconStore::from_reader("keyword\ngood\n".as_bytes(), &config).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let config = LexiconConfig::with_path("/nonexistent/lexicon.csv");
        let err = LexiconStore::load(&config).unwrap_err();
        assert!(matches!(err, Error::Load(LoadError::Source { .. })));
    }

    #[test]
    fn test_first_duplicate_wins() {
        let store = LexiconStore::from_entries_exact([("good", 1.0), ("good", 0.2)]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.lookup("good"), Some(1.0));
    }

    #[test]
    fn test_empty_phrase_skipped() {
        let store = LexiconStore::from_entries_exact([("", 1.0), ("  ", 0.3), ("ok", 0.1)]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_negation_aliases() {
        let store = LexiconStore::from_entries([("not good", -0.5), ("never again", -0.7)]);

        assert_eq!(store.lookup("not good"), Some(-0.5));
        assert_eq!(store.lookup("negtag_good"), Some(-0.5));
        assert_eq!(store.lookup("negtag_again"), Some(-0.7));
        assert_eq!(store.alias_count(), 2);
        assert_eq!(store.get("negtag_good").unwrap().phrase, "not good");
    }

    #[test]
    fn test_only_negation_phrases_are_aliased() {
        let store = LexiconStore::from_entries([
            (":(", -0.8),
            ("Moon", 0.9),
            ("52-week", 0.3),
            ("$spy", -0.2),
            ("a lot", 0.5),
            ("no", -0.4),
            ("Not good", -0.5),
            ("not Good", -0.5),
            ("not the", -0.1),
            ("not $spy", -0.1),
            ("not no", -0.1),
            ("very good", 0.6),
        ]);

        assert_eq!(store.alias_count(), 0);
        for key in ["emojineg", "moon", "numbertag", "cashtag", "lot", "negtag_", "negtag_good"] {
            assert!(!store.contains(key), "unexpected alias {key}");
        }
    }

    #[test]
    fn test_exact_phrase_beats_alias() {
        let store = LexiconStore::from_entries([("not good", -0.5), ("negtag_good", -0.9)]);
        assert_eq!(store.lookup("negtag_good"), Some(-0.9));
        assert_eq!(store.alias_count(), 0);
    }

    #[test]
    fn test_exact_store_has_no_aliases() {
        let store = LexiconStore::from_entries_exact([("not good", -0.5)]);
        assert!(!store.contains("negtag_good"));
        assert_eq!(store.alias_count(), 0);
    }

    #[test]
    fn test_aliases_disabled_by_config() {
        let config = LexiconConfig {
            negation_aliases: false,
            ..LexiconConfig::default()
        };
        let csv = "keyword,sw\nnot good,-0.5\n";
        let store = LexiconStore::from_reader(csv.as_bytes(), &config).unwrap();
        assert!(!store.contains("negtag_good"));
    }
}
