//! sentlex Core
//!
//! Core types and utilities shared across sentlex components.
//!
//! This crate provides:
//! - Error types and result handling, including lexicon load failures
//! - The lexicon entry model
//! - Token tags produced by the tokenizer

pub mod error;
pub mod types;

pub use error::{Error, LoadError, Result};
pub use types::{LexiconEntry, Tag, TaggedToken};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, LoadError, Result};
    pub use crate::types::{LexiconEntry, Tag, TaggedToken};
}
