//! Configuration for lexicon loading

use sentlex_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the lexicon lives and how its columns are named
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// CSV file with a header row
    #[serde(default = "default_lexicon_path")]
    pub path: PathBuf,

    /// Column holding the keyword or phrase
    #[serde(default = "default_keyword_column")]
    pub keyword_column: String,

    /// Column holding the numeric weight
    #[serde(default = "default_weight_column")]
    pub weight_column: String,

    /// Also index `<negation> <word>` phrases as `negtag_<word>`
    #[serde(default = "default_true")]
    pub negation_aliases: bool,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            path: default_lexicon_path(),
            keyword_column: default_keyword_column(),
            weight_column: default_weight_column(),
            negation_aliases: true,
        }
    }
}

impl LexiconConfig {
    /// Config for the given path with default column names
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check the column names before any row is read
    pub fn validate(&self) -> Result<()> {
        if self.keyword_column.is_empty() || self.weight_column.is_empty() {
            return Err(Error::config("lexicon column names must not be empty"));
        }
        if self.keyword_column == self.weight_column {
            return Err(Error::config(format!(
                "keyword and weight columns are both '{}'",
                self.keyword_column
            )));
        }
        Ok(())
    }
}

fn default_lexicon_path() -> PathBuf {
    PathBuf::from("./lexicons/l1.csv")
}

fn default_keyword_column() -> String {
    "keyword".to_string()
}

fn default_weight_column() -> String {
    "sw".to_string()
}

fn default_true() -> bool {
    true
}
