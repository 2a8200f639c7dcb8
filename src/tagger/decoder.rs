//! Bigram tag decoder.
//!
//! Each word gets the tag `t` maximizing
//!
//! ```text
//! P(t | previous tag) * (weight(word, t) + 1)
//! ```
//!
//! over the tags reachable from the previous one. Candidates are visited
//! in canonical tag order and only a strictly greater score replaces the
//! current best, so ties go to the tag listed first in [`Tag::ALL`].

use std::sync::Arc;

use crate::cache::{CacheStats, LruCache};
use crate::lexicon::Tables;
use crate::tag::Tag;
use crate::tagger::classifier::{SYMBOL, UNKNOWN};
use crate::tagger::config::TaggerConfig;

/// The previous-tag state threaded through one tagging call.
///
/// Starts in the sentence-ender state, so the first word of every call is
/// tagged as the first word of a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderState {
    current_tag: Tag,
}

impl Default for DecoderState {
    fn default() -> Self {
        Self::new()
    }
}

impl DecoderState {
    pub fn new() -> Self {
        DecoderState {
            current_tag: Tag::SENTENCE_END,
        }
    }

    pub fn current_tag(&self) -> Tag {
        self.current_tag
    }

    pub fn advance(&mut self, tag: Tag) {
        self.current_tag = tag;
    }

    pub fn reset(&mut self) {
        self.current_tag = Tag::SENTENCE_END;
    }
}

/// Chooses a tag for each classified word.
pub struct Decoder {
    tables: Arc<Tables>,
    unknown_word_tag: Tag,
    relax: bool,
    cache: LruCache<(Tag, String), Option<Tag>>,
}

impl std::fmt::Debug for Decoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decoder")
            .field("unknown_word_tag", &self.unknown_word_tag)
            .field("relax", &self.relax)
            .field("cache", &self.cache)
            .finish()
    }
}

impl Decoder {
    pub fn new(tables: Arc<Tables>, config: &TaggerConfig) -> Self {
        Decoder {
            tables,
            unknown_word_tag: config.unknown_tag(),
            relax: config.relax,
            cache: LruCache::new(config.cache_size),
        }
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// Best tag for `word` after `prev`, or `None` when no tag reachable
    /// from `prev` is viable.
    ///
    /// `word` is a key produced by the word classifier.
    pub fn assign_tag(&self, prev: Tag, word: &str) -> Option<Tag> {
        if word == UNKNOWN {
            return Some(self.unknown_word_tag);
        }
        if word == SYMBOL {
            return Some(Tag::Sym);
        }

        let emissions = self.tables.lexicon().get(word);
        let mut best: Option<(Tag, f64)> = None;

        for (tag, probability) in self.tables.transitions().successors(prev) {
            let weight = match emissions.and_then(|e| e.get(tag)) {
                Some(weight) => weight,
                None if self.relax && tag.is_open_class() => 0.0,
                None => continue,
            };
            let score = probability * (weight + 1.0);
            if score > best.map_or(0.0, |(_, s)| s) {
                best = Some((tag, score));
            }
        }

        best.map(|(tag, _)| tag)
    }

    /// [`Decoder::assign_tag`], memoized by `(prev, word)`.
    pub fn assign_tag_cached(&self, prev: Tag, word: &str) -> Option<Tag> {
        self.cache
            .get_or_insert_with((prev, word.to_string()), || self.assign_tag(prev, word))
    }

    /// Tag a sequence of classified words as one top-level call.
    ///
    /// State starts in the sentence-ender state and is discarded afterwards,
    /// so separate calls never influence each other.
    pub fn decode<S: AsRef<str>>(&self, words: &[S]) -> Vec<Tag> {
        let mut state = DecoderState::new();
        let tags = words
            .iter()
            .map(|word| {
                let tag = self
                    .assign_tag_cached(state.current_tag(), word.as_ref())
                    .unwrap_or(Tag::DEFAULT);
                state.advance(tag);
                tag
            })
            .collect();
        state.reset();
        tags
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Lexicon, TransitionTable};

    fn tables() -> Arc<Tables> {
        let mut lexicon = Lexicon::new();
        lexicon.insert("the", Tag::Det, 100.0);
        lexicon.insert("dog", Tag::Nn, 10.0);
        lexicon.insert("dog", Tag::Vb, 1.0);
        lexicon.insert("runs", Tag::Vbz, 5.0);
        lexicon.insert("runs", Tag::Nns, 1.0);
        lexicon.insert(".", Tag::Pp, 50.0);
        lexicon.insert("tie", Tag::Nn, 1.0);
        lexicon.insert("tie", Tag::Jj, 1.0);

        let mut transitions = TransitionTable::new();
        transitions.set(Tag::Pp, Tag::Det, 0.5);
        transitions.set(Tag::Pp, Tag::Nn, 0.2);
        transitions.set(Tag::Det, Tag::Nn, 0.6);
        transitions.set(Tag::Det, Tag::Jj, 0.3);
        transitions.set(Tag::Det, Tag::Vb, 0.01);
        transitions.set(Tag::Nn, Tag::Vbz, 0.3);
        transitions.set(Tag::Nn, Tag::Nns, 0.1);
        transitions.set(Tag::Vbz, Tag::Pp, 0.4);
        transitions.set(Tag::Pp, Tag::Jj, 0.2);
        Arc::new(Tables::new(lexicon, transitions))
    }

    #[test]
    fn test_decode_sentence() {
        let decoder = Decoder::new(tables(), &TaggerConfig::default());
        let tags = decoder.decode(&["the", "dog", "runs", "."]);
        assert_eq!(tags, vec![Tag::Det, Tag::Nn, Tag::Vbz, Tag::Pp]);
    }

    #[test]
    fn test_ties_go_to_canonical_order() {
        let decoder = Decoder::new(tables(), &TaggerConfig::default());
        // pp -> jj and pp -> nn both score 0.2 * 2; jj comes first.
        assert_eq!(decoder.assign_tag(Tag::Pp, "tie"), Some(Tag::Jj));
    }

    #[test]
    fn test_relax_considers_open_classes() {
        let strict = Decoder::new(tables(), &TaggerConfig::default());
        let relaxed = Decoder::new(tables(), &TaggerConfig::default().with_relax(true));
        // "the" was never seen after det.
        assert_eq!(strict.assign_tag(Tag::Det, "the"), None);
        assert_eq!(relaxed.assign_tag(Tag::Det, "the"), Some(Tag::Nn));
    }

    #[test]
    fn test_pseudo_words() {
        let decoder = Decoder::new(tables(), &TaggerConfig::default());
        assert_eq!(decoder.assign_tag(Tag::Pp, SYMBOL), Some(Tag::Sym));
        assert_eq!(decoder.assign_tag(Tag::Pp, UNKNOWN), Some(Tag::Nn));

        let config = TaggerConfig::default().with_unknown_word_tag(Tag::Fw);
        let decoder = Decoder::new(tables(), &config);
        assert_eq!(decoder.assign_tag(Tag::Pp, UNKNOWN), Some(Tag::Fw));
    }

    #[test]
    fn test_no_viable_transition_defaults_to_nn() {
        let decoder = Decoder::new(tables(), &TaggerConfig::default());
        assert_eq!(decoder.assign_tag(Tag::Uh, "dog"), None);
        assert_eq!(decoder.decode(&["-unknown-", "zzz"]), vec![Tag::Nn, Tag::Nn]);
    }

    #[test]
    fn test_caching_does_not_change_results() {
        let decoder = Decoder::new(tables(), &TaggerConfig::default());
        let first = decoder.decode(&["the", "dog", "runs", "."]);
        let second = decoder.decode(&["the", "dog", "runs", "."]);
        assert_eq!(first, second);
        assert_eq!(decoder.assign_tag_cached(Tag::Det, "dog"), decoder.assign_tag(Tag::Det, "dog"));

        let stats = decoder.cache_stats();
        assert_eq!(stats.misses, 4);
        assert_eq!(stats.hits, 5);
    }

    #[test]
    fn test_empty_tables() {
        let decoder = Decoder::new(Arc::new(Tables::empty()), &TaggerConfig::default());
        assert_eq!(decoder.decode(&["anything", "-sym-"]), vec![Tag::Nn, Tag::Sym]);
    }

    #[test]
    fn test_state_resets() {
        let mut state = DecoderState::new();
        assert_eq!(state.current_tag(), Tag::Pp);
        state.advance(Tag::Nn);
        assert_eq!(state.current_tag(), Tag::Nn);
        state.reset();
        assert_eq!(state.current_tag(), Tag::Pp);
    }
}
