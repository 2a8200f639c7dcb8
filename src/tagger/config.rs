//! Tagger configuration.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tag::Tag;

/// Options fixed for the lifetime of a [`Tagger`](crate::tagger::Tagger).
///
/// Every field has a default, so a JSON file only needs the options it
/// changes:
///
/// ```
/// use engtag::tagger::TaggerConfig;
///
/// let config: TaggerConfig = serde_json::from_str(r#"{ "stem": true }"#).unwrap();
/// assert!(config.stem);
/// assert_eq!(config.longest_noun_phrase, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggerConfig {
    /// Tag for words the classifier cannot place at all. `None` means `nn`.
    pub unknown_word_tag: Option<Tag>,

    /// Stem extracted terms with the Porter stemmer.
    pub stem: bool,

    /// Multiply noun-phrase counts by their word count.
    pub weight_noun_phrases: bool,

    /// Longest noun phrase (in words) the phrase extractor reports.
    pub longest_noun_phrase: usize,

    /// Let open-class tags compete for words never seen with them.
    pub relax: bool,

    /// Remove markup from input text before tokenizing.
    pub strip_markup: bool,

    /// Entries per memoization cache. Zero disables caching.
    pub cache_size: usize,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        TaggerConfig {
            unknown_word_tag: None,
            stem: false,
            weight_noun_phrases: false,
            longest_noun_phrase: 5,
            relax: false,
            strip_markup: false,
            cache_size: 1000,
        }
    }
}

impl TaggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn with_unknown_word_tag(mut self, tag: Tag) -> Self {
        self.unknown_word_tag = Some(tag);
        self
    }

    pub fn with_stem(mut self, stem: bool) -> Self {
        self.stem = stem;
        self
    }

    pub fn with_weight_noun_phrases(mut self, weight: bool) -> Self {
        self.weight_noun_phrases = weight;
        self
    }

    pub fn with_longest_noun_phrase(mut self, words: usize) -> Self {
        self.longest_noun_phrase = words;
        self
    }

    pub fn with_relax(mut self, relax: bool) -> Self {
        self.relax = relax;
        self
    }

    pub fn with_strip_markup(mut self, strip: bool) -> Self {
        self.strip_markup = strip;
        self
    }

    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }

    /// The tag given to `-unknown-` words.
    pub fn unknown_tag(&self) -> Tag {
        self.unknown_word_tag.unwrap_or(Tag::DEFAULT)
    }
}
