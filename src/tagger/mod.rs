//! The part-of-speech tagger.
//!
//! A [`Tagger`] owns a shared handle to the tagger [`Tables`], a fixed
//! [`TaggerConfig`] and its memoization caches. Every tagging call is
//! independent: the decoder state starts fresh for each call, so one
//! tagger can be shared across threads.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use engtag::lexicon::{Lexicon, Tables, TransitionTable};
//! use engtag::tag::Tag;
//! use engtag::tagger::{Tagger, TaggerConfig};
//!
//! let mut lexicon = Lexicon::new();
//! lexicon.insert("the", Tag::Det, 100.0);
//! lexicon.insert("cat", Tag::Nn, 10.0);
//! lexicon.insert("sat", Tag::Vbd, 10.0);
//! lexicon.insert(".", Tag::Pp, 100.0);
//!
//! let mut transitions = TransitionTable::new();
//! transitions.set(Tag::Pp, Tag::Det, 0.5);
//! transitions.set(Tag::Det, Tag::Nn, 0.6);
//! transitions.set(Tag::Nn, Tag::Vbd, 0.4);
//! transitions.set(Tag::Vbd, Tag::Pp, 0.3);
//!
//! let tables = Arc::new(Tables::new(lexicon, transitions));
//! let tagger = Tagger::new(tables, TaggerConfig::default());
//!
//! assert_eq!(
//!     tagger.add_tags("The cat sat.", false).unwrap(),
//!     "<det>The</det> <nn>cat</nn> <vbd>sat</vbd> <pp>.</pp>"
//! );
//! assert_eq!(
//!     tagger.get_readable("The cat sat.", false).unwrap(),
//!     "The/DET cat/NN sat/VBD ./PP"
//! );
//! ```

pub mod classifier;
pub mod config;
pub mod decoder;

use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;
use log::debug;
use rayon::prelude::*;

use crate::analysis::char_filter::{CharFilter, MarkupCharFilter};
use crate::analysis::token::TaggedToken;
use crate::analysis::token_filter::{Filter, SentenceBoundaryFilter};
use crate::analysis::tokenizer::{PunctTokenizer, Tokenizer};
use crate::cache::CacheStats;
use crate::extract::Extractor;
use crate::lexicon::Tables;
use crate::markup;
use crate::tag::Tag;

pub use config::TaggerConfig;
pub use decoder::{Decoder, DecoderState};

/// Cache statistics of a tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggerCacheStats {
    /// `(previous tag, word)` → tag lookups.
    pub tags: CacheStats,

    /// Word → stem lookups.
    pub stems: CacheStats,
}

/// English part-of-speech tagger.
pub struct Tagger {
    config: TaggerConfig,
    decoder: Decoder,
    extractor: Extractor,
    tokenizer: PunctTokenizer,
    sentence_filter: SentenceBoundaryFilter,
    char_filter: Option<Box<dyn CharFilter>>,
}

impl std::fmt::Debug for Tagger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tagger")
            .field("config", &self.config)
            .field("decoder", &self.decoder)
            .field("extractor", &self.extractor)
            .finish()
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

impl Tagger {
    /// Create a tagger over shared tables.
    pub fn new(tables: Arc<Tables>, config: TaggerConfig) -> Self {
        let char_filter: Option<Box<dyn CharFilter>> = if config.strip_markup {
            Some(Box::new(MarkupCharFilter::new()))
        } else {
            None
        };
        Tagger {
            decoder: Decoder::new(tables, &config),
            extractor: Extractor::new(&config),
            tokenizer: PunctTokenizer::new(),
            sentence_filter: SentenceBoundaryFilter::new(),
            char_filter,
            config,
        }
    }

    /// Create a tagger from the tables in `dir`.
    ///
    /// Never fails: when the tables cannot be loaded a warning is logged
    /// and the tagger runs on empty tables, tagging every word `nn`.
    pub fn from_dir<P: AsRef<Path>>(dir: P, config: TaggerConfig) -> Self {
        Self::new(Arc::new(Tables::load_or_empty(dir)), config)
    }

    pub fn config(&self) -> &TaggerConfig {
        &self.config
    }

    pub fn tables(&self) -> &Tables {
        self.decoder.tables()
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Split text into the tokens the decoder sees.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let stripped;
        let text = match &self.char_filter {
            Some(filter) => {
                stripped = filter.filter(text);
                stripped.as_str()
            }
            None => text,
        };
        self.sentence_filter.filter(self.tokenizer.tokenize(text))
    }

    /// Tag `text`. Blank text yields no tokens.
    pub fn tag(&self, text: &str) -> Vec<TaggedToken> {
        if is_blank(text) {
            return Vec::new();
        }
        let words = self.tokenize(text);
        let tags = {
            let lexicon = self.decoder.tables().lexicon();
            let keys: Vec<_> = words
                .iter()
                .map(|w| classifier::classify_word(lexicon, w))
                .collect();
            self.decoder.decode(&keys)
        };

        words
            .into_iter()
            .zip(tags)
            .map(|(word, tag)| TaggedToken::new(word, tag))
            .collect()
    }

    /// Tag several documents in parallel. Each one is tagged as a separate
    /// call.
    pub fn tag_batch<S>(&self, texts: &[S]) -> Vec<Vec<TaggedToken>>
    where
        S: AsRef<str> + Sync,
    {
        let tagged: Vec<Vec<TaggedToken>> =
            texts.par_iter().map(|t| self.tag(t.as_ref())).collect();
        let stats = self.cache_stats();
        debug!(
            "tagged {} documents; tag cache hit ratio {:.3}, stem cache hit ratio {:.3}",
            texts.len(),
            stats.tags.hit_ratio(),
            stats.stems.hit_ratio()
        );
        tagged
    }

    /// Tag `text` and render it as tag markup, e.g.
    /// `<det>The</det> <nn>cat</nn>`. Verbose tag names are used when
    /// `verbose` is set. `None` for blank text.
    pub fn add_tags(&self, text: &str, verbose: bool) -> Option<String> {
        if is_blank(text) {
            return None;
        }
        Some(markup::render(&self.tag(text), verbose))
    }

    /// Same as [`Tagger::add_tags`].
    pub fn tag_to_markup(&self, text: &str, verbose: bool) -> Option<String> {
        self.add_tags(text, verbose)
    }

    /// Tag `text` and render it as `word/TAG` pairs.
    pub fn get_readable(&self, text: &str, verbose: bool) -> Option<String> {
        if is_blank(text) {
            return None;
        }
        Some(markup::render_readable(&self.tag(text), verbose))
    }

    /// Split `text` into sentences at sentence-ending punctuation.
    pub fn get_sentences(&self, text: &str) -> Option<Vec<String>> {
        if is_blank(text) {
            return None;
        }
        let tokens = self.tag(text);
        let sentences = tokens
            .split_inclusive(|t| t.tag == Tag::SENTENCE_END)
            .map(|s| markup::surface(s).trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Some(sentences)
    }

    /// Nouns when `longest_noun_phrase` is at most 1, all noun phrases
    /// otherwise.
    pub fn get_words(&self, text: &str) -> Option<AHashMap<String, usize>> {
        if is_blank(text) {
            return None;
        }
        let tokens = self.tag(text);
        if self.config.longest_noun_phrase <= 1 {
            Some(self.extractor.get_nouns_tokens(&tokens))
        } else {
            Some(self.extractor.get_noun_phrases_tokens(&tokens))
        }
    }

    /// Description of a tag code, e.g. `"nnp"` → `"Noun, proper"`.
    pub fn explain_tag(tag: &str) -> Option<&'static str> {
        tag.parse::<Tag>().ok().map(Tag::description)
    }

    pub fn get_noun_phrases(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.extractor.get_noun_phrases(markup)
    }

    pub fn get_max_noun_phrases(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.extractor.get_max_noun_phrases(markup)
    }

    pub fn get_nouns(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.extractor.get_nouns(markup)
    }

    pub fn get_proper_nouns(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.extractor.get_proper_nouns(markup)
    }

    pub fn get_verbs(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.extractor.get_verbs(markup)
    }

    pub fn get_infinitive_verbs(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.extractor.get_infinitive_verbs(markup)
    }

    pub fn get_past_tense_verbs(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.extractor.get_past_tense_verbs(markup)
    }

    pub fn get_gerund_verbs(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.extractor.get_gerund_verbs(markup)
    }

    pub fn get_passive_verbs(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.extractor.get_passive_verbs(markup)
    }

    pub fn get_base_present_verbs(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.extractor.get_base_present_verbs(markup)
    }

    pub fn get_present_verbs(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.extractor.get_present_verbs(markup)
    }

    pub fn get_adjectives(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.extractor.get_adjectives(markup)
    }

    pub fn get_comparative_adjectives(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.extractor.get_comparative_adjectives(markup)
    }

    pub fn get_superlative_adjectives(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.extractor.get_superlative_adjectives(markup)
    }

    pub fn get_adverbs(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.extractor.get_adverbs(markup)
    }

    pub fn get_interrogatives(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.extractor.get_interrogatives(markup)
    }

    pub fn get_conjunctions(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.extractor.get_conjunctions(markup)
    }

    pub fn cache_stats(&self) -> TaggerCacheStats {
        TaggerCacheStats {
            tags: self.decoder.cache_stats(),
            stems: self.extractor.stem_cache_stats(),
        }
    }
}
