//! CLI configuration

use crate::{Cli, Commands};
use sentlex_classifiers::LexiconConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Lexicon source
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Batch scoring options
    #[serde(default)]
    pub batch: BatchConfig,
}

impl AppConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, cli: &Cli) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        config.apply_overrides(cli);
        Ok(config)
    }

    fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(lexicon) = &cli.lexicon {
            self.lexicon.path = lexicon.clone();
        }

        if let Commands::Batch {
            text_column,
            score_column,
            threads,
            ..
        } = &cli.command
        {
            if let Some(column) = text_column {
                self.batch.text_column = column.clone();
            }
            if let Some(column) = score_column {
                self.batch.score_column = column.clone();
            }
            if threads.is_some() {
                self.batch.threads = *threads;
            }
        }
    }
}

/// Batch scoring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Input column holding the post text
    #[serde(default = "default_text_column")]
    pub text_column: String,

    /// Output column receiving the score
    #[serde(default = "default_score_column")]
    pub score_column: String,

    /// Worker threads, defaults to the number of CPUs
    #[serde(default)]
    pub threads: Option<usize>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            text_column: default_text_column(),
            score_column: default_score_column(),
            threads: None,
        }
    }
}

impl BatchConfig {
    /// Effective worker count
    pub fn worker_threads(&self) -> usize {
        self.threads.filter(|&n| n > 0).unwrap_or_else(num_cpus::get)
    }
}

fn default_text_column() -> String {
    "text".to_string()
}

fn default_score_column() -> String {
    "sent".to_string()
}
