//! # engtag
//!
//! A corpus-trained English part-of-speech tagger.
//!
//! ## Features
//!
//! - Bigram hidden-Markov tagging over 44 Penn-style tags
//! - Tokenization with contraction splitting and abbreviation-aware
//!   sentence boundaries
//! - Heuristic tagging of words the lexicon has never seen
//! - Tag markup output and parsing
//! - Noun phrase, proper noun and word class extraction with counts
//! - Binary snapshots of the tagger tables for fast startup
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use engtag::lexicon::Tables;
//! use engtag::tagger::{Tagger, TaggerConfig};
//!
//! // Without a lexicon every word is a common noun.
//! let tagger = Tagger::new(Arc::new(Tables::empty()), TaggerConfig::default());
//! assert_eq!(
//!     tagger.add_tags("Hello world", false).unwrap(),
//!     "<nn>Hello</nn> <nn>world</nn>"
//! );
//! ```

pub mod analysis;
pub mod cache;
pub mod cli;
pub mod error;
pub mod extract;
pub mod lexicon;
pub mod markup;
pub mod tag;
pub mod tagger;

pub mod prelude {
    pub use crate::analysis::TaggedToken;
    pub use crate::error::{Result, TaggerError};
    pub use crate::lexicon::{Lexicon, Tables, TransitionTable};
    pub use crate::tag::Tag;
    pub use crate::tagger::{Tagger, TaggerConfig};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
