//! Text analysis: everything that happens to text before a tag is chosen.
//!
//! The pipeline is
//!
//! 1. an optional [`CharFilter`](char_filter::CharFilter) (markup stripping),
//! 2. the [`PunctTokenizer`](tokenizer::PunctTokenizer),
//! 3. the [`SentenceBoundaryFilter`](token_filter::SentenceBoundaryFilter).
//!
//! Stemmers live under [`token_filter::stem`] and are applied by the
//! extractors to the terms they collect.

pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use token::TaggedToken;
