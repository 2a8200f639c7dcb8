//! Lexicon and transition tables.
//!
//! The tagger is driven by two immutable tables:
//!
//! - [`Lexicon`]: how often each word was seen with each tag.
//! - [`TransitionTable`]: the probability of a tag given the previous tag.
//!
//! Both are bundled into [`Tables`], which is loaded once and shared
//! behind an `Arc` by every tagger that needs it.
//!
//! # Examples
//!
//! ```
//! use engtag::lexicon::{Lexicon, Tables, TransitionTable};
//! use engtag::tag::Tag;
//!
//! let mut lexicon = Lexicon::new();
//! lexicon.insert("dog", Tag::Nn, 10.0);
//!
//! let mut transitions = TransitionTable::new();
//! transitions.set(Tag::Det, Tag::Nn, 0.6);
//!
//! let tables = Tables::new(lexicon, transitions);
//! assert_eq!(tables.lexicon().weight("dog", Tag::Nn), Some(10.0));
//! assert_eq!(tables.transitions().probability(Tag::Det, Tag::Nn), 0.6);
//! ```

pub mod loader;
pub mod snapshot;

use std::path::Path;

use ahash::AHashMap;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tag::Tag;

/// File name of the word → tag table inside a lexicon directory.
pub const WORDS_FILE: &str = "pos_words.hash";

/// File name of the tag → tag table inside a lexicon directory.
pub const TAGS_FILE: &str = "pos_tags.hash";

/// File name of the binary snapshot inside a lexicon directory.
pub const SNAPSHOT_FILE: &str = "engtag.bin";

/// Emission weights of a single word, in the order they were loaded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Emissions(Vec<(Tag, f64)>);

impl Emissions {
    /// Weight recorded for `tag`, if any.
    pub fn get(&self, tag: Tag) -> Option<f64> {
        self.0.iter().find(|(t, _)| *t == tag).map(|(_, w)| *w)
    }

    /// Whether the word was ever seen with `tag`.
    pub fn contains(&self, tag: Tag) -> bool {
        self.get(tag).is_some()
    }

    /// Set (or replace) the weight for `tag`.
    pub fn set(&mut self, tag: Tag, weight: f64) {
        match self.0.iter_mut().find(|(t, _)| *t == tag) {
            Some(entry) => entry.1 = weight,
            None => self.0.push((tag, weight)),
        }
    }

    /// Iterate over `(tag, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Tag, f64)> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Tag, f64)> for Emissions {
    fn from_iter<I: IntoIterator<Item = (Tag, f64)>>(iter: I) -> Self {
        let mut emissions = Emissions::default();
        for (tag, weight) in iter {
            emissions.set(tag, weight);
        }
        emissions
    }
}

/// Word → tag → emission weight.
///
/// Words are case-sensitive: "Bill" and "bill" are separate entries.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Lexicon {
    words: AHashMap<String, Emissions>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Lexicon {
            words: AHashMap::new(),
        }
    }

    /// Record a weight for `(word, tag)`, replacing any previous one.
    pub fn insert<S: Into<String>>(&mut self, word: S, tag: Tag, weight: f64) {
        self.words.entry(word.into()).or_default().set(tag, weight);
    }

    /// Replace every emission of `word`.
    pub fn insert_emissions<S: Into<String>>(&mut self, word: S, emissions: Emissions) {
        self.words.insert(word.into(), emissions);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn get(&self, word: &str) -> Option<&Emissions> {
        self.words.get(word)
    }

    /// Emission weight of `(word, tag)`; `None` when the pair was never seen.
    pub fn weight(&self, word: &str, tag: Tag) -> Option<f64> {
        self.words.get(word).and_then(|e| e.get(tag))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Emissions)> {
        self.words.iter().map(|(w, e)| (w.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Bigram tag model: `P(next | prev)`.
///
/// Stored as a dense square matrix indexed by [`Tag::index`], so walking
/// the successors of a tag always visits them in canonical tag order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionTable {
    probabilities: Vec<f64>,
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionTable {
    /// Create a table with every transition at probability zero.
    pub fn new() -> Self {
        TransitionTable {
            probabilities: vec![0.0; Tag::COUNT * Tag::COUNT],
        }
    }

    #[inline]
    fn offset(prev: Tag, next: Tag) -> usize {
        prev.index() * Tag::COUNT + next.index()
    }

    /// Set `P(next | prev)`.
    pub fn set(&mut self, prev: Tag, next: Tag, probability: f64) {
        self.probabilities[Self::offset(prev, next)] = probability;
    }

    /// `P(next | prev)`, zero when the transition was never observed.
    pub fn probability(&self, prev: Tag, next: Tag) -> f64 {
        self.probabilities[Self::offset(prev, next)]
    }

    /// Tags reachable from `prev`, in canonical order, with their probability.
    pub fn successors(&self, prev: Tag) -> impl Iterator<Item = (Tag, f64)> + '_ {
        let row = &self.probabilities[prev.index() * Tag::COUNT..(prev.index() + 1) * Tag::COUNT];
        Tag::ALL
            .iter()
            .zip(row)
            .filter(|(_, p)| **p > 0.0)
            .map(|(t, p)| (*t, *p))
    }

    /// Number of transitions with a positive probability.
    pub fn len(&self) -> usize {
        self.probabilities.iter().filter(|p| **p > 0.0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The lexicon and transition table a tagger runs on.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Tables {
    lexicon: Lexicon,
    transitions: TransitionTable,
}

impl Tables {
    pub fn new(lexicon: Lexicon, transitions: TransitionTable) -> Self {
        Tables {
            lexicon,
            transitions,
        }
    }

    /// Tables with no entries. A tagger built on them tags every word `nn`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    /// Load both tables from the text files in `dir`.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let lexicon = loader::load_lexicon(dir.join(WORDS_FILE))?;
        let transitions = loader::load_transitions(dir.join(TAGS_FILE))?;
        info!(
            "loaded {} words and {} transitions from {}",
            lexicon.len(),
            transitions.len(),
            dir.display()
        );
        Ok(Tables::new(lexicon, transitions))
    }

    /// Load from the binary snapshot in `dir` when there is one, otherwise
    /// from the text files.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let snapshot_path = dir.join(SNAPSHOT_FILE);
        if snapshot_path.is_file() {
            snapshot::read_file(snapshot_path)
        } else {
            Self::load(dir)
        }
    }

    /// Like [`Tables::open`], but falls back to empty tables on any failure.
    pub fn load_or_empty<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        match Self::open(dir) {
            Ok(tables) => tables,
            Err(e) => {
                warn!(
                    "could not load tagger tables from {}: {e}; using empty tables",
                    dir.display()
                );
                Self::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_is_case_sensitive() {
        let mut lexicon = Lexicon::new();
        lexicon.insert("Bill", Tag::Nnp, 3.0);
        lexicon.insert("bill", Tag::Nn, 5.0);
        lexicon.insert("bill", Tag::Vb, 1.0);

        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.weight("Bill", Tag::Nnp), Some(3.0));
        assert_eq!(lexicon.weight("Bill", Tag::Nn), None);
        assert_eq!(lexicon.get("bill").unwrap().len(), 2);
        assert!(!lexicon.contains("BILL"));
    }

    #[test]
    fn test_zero_weight_is_not_absent() {
        let mut lexicon = Lexicon::new();
        lexicon.insert("run", Tag::Vb, 0.0);
        assert_eq!(lexicon.weight("run", Tag::Vb), Some(0.0));
        assert_eq!(lexicon.weight("run", Tag::Nn), None);
    }

    #[test]
    fn test_successors_in_canonical_order() {
        let mut transitions = TransitionTable::new();
        transitions.set(Tag::Pp, Tag::Vb, 0.1);
        transitions.set(Tag::Pp, Tag::Det, 0.5);
        transitions.set(Tag::Pp, Tag::Nnp, 0.2);

        let tags: Vec<Tag> = transitions.successors(Tag::Pp).map(|(t, _)| t).collect();
        assert_eq!(tags, vec![Tag::Det, Tag::Nnp, Tag::Vb]);
        assert_eq!(transitions.successors(Tag::Nn).count(), 0);
        assert_eq!(transitions.len(), 3);
    }

    #[test]
    fn test_load_or_empty_on_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let tables = Tables::load_or_empty(dir.path().join("missing"));
        assert!(tables.lexicon().is_empty());
        assert!(tables.transitions().is_empty());
    }
}
