//! Extraction of nouns, noun phrases and other word categories from
//! tagged text.
//!
//! Every extractor has two forms: one reading tag markup (the output of
//! [`Tagger::add_tags`](crate::tagger::Tagger::add_tags)) and returning
//! `None` for blank input, and a `_tokens` form working directly on
//! tagged tokens.
//!
//! # Examples
//!
//! ```
//! use engtag::extract::Extractor;
//! use engtag::tagger::TaggerConfig;
//!
//! let extractor = Extractor::new(&TaggerConfig::default());
//! let markup = "<det>the</det> <jj>big</jj> <jj>fat</jj> <nn>cat</nn>";
//!
//! let phrases = extractor.get_noun_phrases(markup).unwrap();
//! assert_eq!(phrases["big fat cat"], 1);
//! assert_eq!(phrases["fat cat"], 1);
//! assert_eq!(phrases["cat"], 1);
//! ```

pub mod grammar;
pub mod noun_phrase;
pub mod proper_noun;

use ahash::AHashMap;

use crate::analysis::token::TaggedToken;
use crate::analysis::token_filter::stem::{self, Stemmer};
use crate::cache::{CacheStats, LruCache};
use crate::markup;
use crate::tag::Tag;
use crate::tagger::config::TaggerConfig;

/// Matches whose stemmed form reaches this many characters are dropped.
const MAX_TERM_CHARS: usize = 100;

const NOUNS: &[Tag] = &[Tag::Nn, Tag::Nns, Tag::Nnp, Tag::Nnps];
const VERBS: &[Tag] = &[Tag::Vb, Tag::Vbd, Tag::Vbg, Tag::Vbn, Tag::Vbp, Tag::Vbz];
const ADVERBS: &[Tag] = &[Tag::Rb, Tag::Rbr, Tag::Rbs, Tag::Rp];
const INTERROGATIVES: &[Tag] = &[Tag::Wrb, Tag::Wdt, Tag::Wp, Tag::Wps];
const CONJUNCTIONS: &[Tag] = &[Tag::Cc, Tag::In];

/// A tag pattern an extractor scans for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagPattern<'a> {
    /// Any single token carrying one of these tags.
    Single(&'a [Tag]),
    /// A maximal run of consecutive tokens carrying this tag.
    Run(Tag),
}

impl TagPattern<'_> {
    /// Surface strings of every match in `tokens`.
    pub fn matches(&self, tokens: &[TaggedToken]) -> Vec<String> {
        match *self {
            TagPattern::Single(tags) => tokens
                .iter()
                .filter(|t| tags.contains(&t.tag))
                .map(|t| t.text.clone())
                .collect(),
            TagPattern::Run(tag) => tokens
                .chunk_by(|a, b| a.tag == b.tag)
                .filter(|run| run[0].tag == tag)
                .map(markup::surface)
                .collect(),
        }
    }
}

/// Runs the category extractors with one configuration.
pub struct Extractor {
    stemmer: Box<dyn Stemmer>,
    stem_cache: LruCache<String, String>,
    stem: bool,
    weight_noun_phrases: bool,
    longest_noun_phrase: usize,
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("stemmer", &self.stemmer.name())
            .field("weight_noun_phrases", &self.weight_noun_phrases)
            .field("longest_noun_phrase", &self.longest_noun_phrase)
            .finish()
    }
}

impl Extractor {
    pub fn new(config: &TaggerConfig) -> Self {
        Extractor {
            stemmer: stem::for_config(config.stem),
            stem_cache: LruCache::new(config.cache_size),
            stem: config.stem,
            weight_noun_phrases: config.weight_noun_phrases,
            longest_noun_phrase: config.longest_noun_phrase,
        }
    }

    /// Stem `word` when stemming is enabled, memoized by word.
    pub fn stem(&self, word: &str) -> String {
        if !self.stem {
            return word.to_string();
        }
        self.stem_cache
            .get_or_insert_with(word.to_string(), || self.stemmer.stem(word))
    }

    pub fn stem_cache_stats(&self) -> CacheStats {
        self.stem_cache.stats()
    }

    /// Stem and count `matches`, skipping blank and overlong terms.
    fn count_matches(&self, matches: Vec<String>) -> AHashMap<String, usize> {
        let mut counts = AHashMap::new();
        for m in matches {
            let term = self.stem(&m);
            if term.trim().is_empty() || term.chars().count() >= MAX_TERM_CHARS {
                continue;
            }
            *counts.entry(term).or_insert(0) += 1;
        }
        counts
    }

    /// Count the matches of `patterns` in `tokens`.
    pub fn extract_tokens(
        &self,
        tokens: &[TaggedToken],
        patterns: &[TagPattern<'_>],
    ) -> AHashMap<String, usize> {
        let matches = patterns.iter().flat_map(|p| p.matches(tokens)).collect();
        self.count_matches(matches)
    }

    fn single(&self, tokens: &[TaggedToken], tags: &[Tag]) -> AHashMap<String, usize> {
        self.extract_tokens(tokens, &[TagPattern::Single(tags)])
    }

    /// Parse `markup` and run `extract` on the tokens, or `None` when the
    /// markup is blank.
    fn from_markup<F>(&self, markup: &str, extract: F) -> Option<AHashMap<String, usize>>
    where
        F: FnOnce(&[TaggedToken]) -> AHashMap<String, usize>,
    {
        if markup.trim().is_empty() {
            return None;
        }
        Some(extract(&markup::parse(markup)))
    }

    /// All noun phrases and their nouns, limited, stemmed and weighted
    /// according to the configuration.
    pub fn get_noun_phrases_tokens(&self, tokens: &[TaggedToken]) -> AHashMap<String, usize> {
        let mut counts = AHashMap::new();
        for (phrase, count) in noun_phrase::phrase_occurrences(tokens) {
            let phrase = phrase.split_whitespace().collect::<Vec<_>>().join(" ");
            let word_count = phrase.split(' ').count();
            if word_count > self.longest_noun_phrase {
                continue;
            }
            let key = if word_count == 1 { self.stem(&phrase) } else { phrase };
            let multiplier = if self.weight_noun_phrases { word_count } else { 1 };
            *counts.entry(key).or_insert(0) += count * multiplier;
        }
        counts
    }

    /// Maximal noun phrases only, single words stemmed.
    pub fn get_max_noun_phrases_tokens(&self, tokens: &[TaggedToken]) -> AHashMap<String, usize> {
        let tags: Vec<Tag> = tokens.iter().map(|t| t.tag).collect();
        let mut counts = AHashMap::new();
        for span in grammar::find_noun_phrases(&tags) {
            let phrase = &tokens[span];
            let key = if phrase.len() == 1 {
                self.stem(&phrase[0].text)
            } else {
                markup::surface(phrase)
            };
            if key.trim().is_empty() || key.chars().count() >= MAX_TERM_CHARS {
                continue;
            }
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }

    pub fn get_nouns_tokens(&self, tokens: &[TaggedToken]) -> AHashMap<String, usize> {
        self.single(tokens, NOUNS)
    }

    /// Runs of proper nouns, with acronyms folded into the names they
    /// abbreviate.
    pub fn get_proper_nouns_tokens(&self, tokens: &[TaggedToken]) -> AHashMap<String, usize> {
        let mut counts = self.extract_tokens(tokens, &[TagPattern::Run(Tag::Nnp)]);
        proper_noun::fold_acronyms(&mut counts);
        counts
    }

    pub fn get_verbs_tokens(&self, tokens: &[TaggedToken]) -> AHashMap<String, usize> {
        self.single(tokens, VERBS)
    }

    pub fn get_infinitive_verbs_tokens(&self, tokens: &[TaggedToken]) -> AHashMap<String, usize> {
        self.single(tokens, &[Tag::Vb])
    }

    pub fn get_past_tense_verbs_tokens(&self, tokens: &[TaggedToken]) -> AHashMap<String, usize> {
        self.single(tokens, &[Tag::Vbd])
    }

    pub fn get_gerund_verbs_tokens(&self, tokens: &[TaggedToken]) -> AHashMap<String, usize> {
        self.single(tokens, &[Tag::Vbg])
    }

    pub fn get_passive_verbs_tokens(&self, tokens: &[TaggedToken]) -> AHashMap<String, usize> {
        self.single(tokens, &[Tag::Vbn])
    }

    pub fn get_base_present_verbs_tokens(&self, tokens: &[TaggedToken]) -> AHashMap<String, usize> {
        self.single(tokens, &[Tag::Vbp])
    }

    pub fn get_present_verbs_tokens(&self, tokens: &[TaggedToken]) -> AHashMap<String, usize> {
        self.single(tokens, &[Tag::Vbz])
    }

    pub fn get_adjectives_tokens(&self, tokens: &[TaggedToken]) -> AHashMap<String, usize> {
        self.single(tokens, &[Tag::Jj])
    }

    pub fn get_comparative_adjectives_tokens(
        &self,
        tokens: &[TaggedToken],
    ) -> AHashMap<String, usize> {
        self.single(tokens, &[Tag::Jjr])
    }

    pub fn get_superlative_adjectives_tokens(
        &self,
        tokens: &[TaggedToken],
    ) -> AHashMap<String, usize> {
        self.single(tokens, &[Tag::Jjs])
    }

    pub fn get_adverbs_tokens(&self, tokens: &[TaggedToken]) -> AHashMap<String, usize> {
        self.single(tokens, ADVERBS)
    }

    pub fn get_interrogatives_tokens(&self, tokens: &[TaggedToken]) -> AHashMap<String, usize> {
        self.single(tokens, INTERROGATIVES)
    }

    pub fn get_conjunctions_tokens(&self, tokens: &[TaggedToken]) -> AHashMap<String, usize> {
        self.single(tokens, CONJUNCTIONS)
    }

    pub fn get_noun_phrases(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.from_markup(markup, |t| self.get_noun_phrases_tokens(t))
    }

    pub fn get_max_noun_phrases(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.from_markup(markup, |t| self.get_max_noun_phrases_tokens(t))
    }

    pub fn get_nouns(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.from_markup(markup, |t| self.get_nouns_tokens(t))
    }

    pub fn get_proper_nouns(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.from_markup(markup, |t| self.get_proper_nouns_tokens(t))
    }

    pub fn get_verbs(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.from_markup(markup, |t| self.get_verbs_tokens(t))
    }

    pub fn get_infinitive_verbs(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.from_markup(markup, |t| self.get_infinitive_verbs_tokens(t))
    }

    pub fn get_past_tense_verbs(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.from_markup(markup, |t| self.get_past_tense_verbs_tokens(t))
    }

    pub fn get_gerund_verbs(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.from_markup(markup, |t| self.get_gerund_verbs_tokens(t))
    }

    pub fn get_passive_verbs(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.from_markup(markup, |t| self.get_passive_verbs_tokens(t))
    }

    pub fn get_base_present_verbs(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.from_markup(markup, |t| self.get_base_present_verbs_tokens(t))
    }

    pub fn get_present_verbs(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.from_markup(markup, |t| self.get_present_verbs_tokens(t))
    }

    pub fn get_adjectives(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.from_markup(markup, |t| self.get_adjectives_tokens(t))
    }

    pub fn get_comparative_adjectives(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.from_markup(markup, |t| self.get_comparative_adjectives_tokens(t))
    }

    pub fn get_superlative_adjectives(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.from_markup(markup, |t| self.get_superlative_adjectives_tokens(t))
    }

    pub fn get_adverbs(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.from_markup(markup, |t| self.get_adverbs_tokens(t))
    }

    pub fn get_interrogatives(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.from_markup(markup, |t| self.get_interrogatives_tokens(t))
    }

    pub fn get_conjunctions(&self, markup: &str) -> Option<AHashMap<String, usize>> {
        self.from_markup(markup, |t| self.get_conjunctions_tokens(t))
    }
}
