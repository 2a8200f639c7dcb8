//! Filters that rewrite token sequences between tokenizing and tagging.

/// Trait for filters that transform token sequences.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token sequence.
    fn filter(&self, tokens: Vec<String>) -> Vec<String>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod sentence;
pub mod stem;

pub use sentence::SentenceBoundaryFilter;
pub use stem::{IdentityStemmer, PorterStemmer, Stemmer};
