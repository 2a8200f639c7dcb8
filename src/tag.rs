//! Part-of-speech tag set.
//!
//! The tagger works with a closed set of 44 tags: the Penn Treebank
//! categories with a few simplifications (`det` for determiners, `prps`
//! for possessive pronouns) and a dedicated family of punctuation tags
//! (`pp`, `ppc`, `ppl`, ...). `pp` marks sentence-final punctuation and is
//! also the state the decoder starts every sentence in.
//!
//! # Examples
//!
//! ```
//! use engtag::tag::Tag;
//!
//! let tag: Tag = "NNP".parse().unwrap();
//! assert_eq!(tag, Tag::Nnp);
//! assert_eq!(tag.as_str(), "nnp");
//! assert_eq!(tag.description(), "Noun, proper");
//! assert_eq!(tag.verbose_name(), "noun_proper");
//! assert!(tag.is_noun());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaggerError};

/// A part-of-speech tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Tag {
    Cc,
    Cd,
    Det,
    Ex,
    Fw,
    In,
    Jj,
    Jjr,
    Jjs,
    Ls,
    Md,
    Nn,
    Nnp,
    Nnps,
    Nns,
    Pdt,
    Pos,
    Prp,
    Prps,
    Rb,
    Rbr,
    Rbs,
    Rp,
    Sym,
    To,
    Uh,
    Vb,
    Vbd,
    Vbg,
    Vbn,
    Vbp,
    Vbz,
    Wdt,
    Wp,
    Wps,
    Wrb,
    Pp,
    Ppc,
    Ppd,
    Ppl,
    Ppr,
    Pps,
    Lrb,
    Rrb,
}

// (code, description, verbose markup name), indexed by discriminant.
const TAG_INFO: [(&str, &str, &str); Tag::COUNT] = [
    ("cc", "Conjunction, coordinating", "conjunction_coordinating"),
    ("cd", "Adjective, cardinal number", "adjective_cardinal_number"),
    ("det", "Determiner", "determiner"),
    ("ex", "Pronoun, existential there", "pronoun_existential_there"),
    ("fw", "Foreign words", "foreign_words"),
    ("in", "Preposition / Conjunction", "preposition_conjunction"),
    ("jj", "Adjective", "adjective"),
    ("jjr", "Adjective, comparative", "adjective_comparative"),
    ("jjs", "Adjective, superlative", "adjective_superlative"),
    ("ls", "Symbol, list item", "symbol_list_item"),
    ("md", "Verb, modal", "verb_modal"),
    ("nn", "Noun", "noun"),
    ("nnp", "Noun, proper", "noun_proper"),
    ("nnps", "Noun, proper, plural", "noun_proper_plural"),
    ("nns", "Noun, plural", "noun_plural"),
    ("pdt", "Determiner, prequalifier", "determiner_prequalifier"),
    ("pos", "Possessive", "possessive"),
    ("prp", "Determiner, possessive second", "determiner_possessive_second"),
    ("prps", "Determiner, possessive", "determiner_possessive"),
    ("rb", "Adverb", "adverb"),
    ("rbr", "Adverb, comparative", "adverb_comparative"),
    ("rbs", "Adverb, superlative", "adverb_superlative"),
    ("rp", "Adverb, particle", "adverb_particle"),
    ("sym", "Symbol", "symbol"),
    ("to", "Preposition", "preposition"),
    ("uh", "Interjection", "interjection"),
    ("vb", "Verb, infinitive", "verb_infinitive"),
    ("vbd", "Verb, past tense", "verb_past_tense"),
    ("vbg", "Verb, gerund", "verb_gerund"),
    ("vbn", "Verb, past/passive participle", "verb_past_passive_participle"),
    ("vbp", "Verb, base present form", "verb_base_present_form"),
    ("vbz", "Verb, present 3SG -s form", "verb_present_3sg_s_form"),
    ("wdt", "Determiner, question", "determiner_question"),
    ("wp", "Pronoun, question", "pronoun_question"),
    ("wps", "Determiner, possessive & question", "determiner_possessive_question"),
    ("wrb", "Adverb, question", "adverb_question"),
    ("pp", "Punctuation, sentence ender", "punctuation_sentence_ender"),
    ("ppc", "Punctuation, comma", "punctuation_comma"),
    ("ppd", "Punctuation, dollar sign", "punctuation_dollar_sign"),
    ("ppl", "Punctuation, quotation mark left", "punctuation_quotation_mark_left"),
    ("ppr", "Punctuation, quotation mark right", "punctuation_quotation_mark_right"),
    ("pps", "Punctuation, colon, semicolon, elipsis", "punctuation_colon_semicolon_elipsis"),
    ("lrb", "Punctuation, left bracket", "punctuation_left_bracket"),
    ("rrb", "Punctuation, right bracket", "punctuation_right_bracket"),
];

impl Tag {
    /// Number of tags in the tag set.
    pub const COUNT: usize = 44;

    /// All tags in canonical order.
    ///
    /// The decoder walks candidate tags in this order, so when two tags
    /// score equally the one listed first wins.
    pub const ALL: [Tag; Tag::COUNT] = [
        Tag::Cc,
        Tag::Cd,
        Tag::Det,
        Tag::Ex,
        Tag::Fw,
        Tag::In,
        Tag::Jj,
        Tag::Jjr,
        Tag::Jjs,
        Tag::Ls,
        Tag::Md,
        Tag::Nn,
        Tag::Nnp,
        Tag::Nnps,
        Tag::Nns,
        Tag::Pdt,
        Tag::Pos,
        Tag::Prp,
        Tag::Prps,
        Tag::Rb,
        Tag::Rbr,
        Tag::Rbs,
        Tag::Rp,
        Tag::Sym,
        Tag::To,
        Tag::Uh,
        Tag::Vb,
        Tag::Vbd,
        Tag::Vbg,
        Tag::Vbn,
        Tag::Vbp,
        Tag::Vbz,
        Tag::Wdt,
        Tag::Wp,
        Tag::Wps,
        Tag::Wrb,
        Tag::Pp,
        Tag::Ppc,
        Tag::Ppd,
        Tag::Ppl,
        Tag::Ppr,
        Tag::Pps,
        Tag::Lrb,
        Tag::Rrb,
    ];

    /// The sentence-ender tag, also the decoder's start state.
    pub const SENTENCE_END: Tag = Tag::Pp;

    /// Tag used when the decoder finds no viable transition.
    pub const DEFAULT: Tag = Tag::Nn;

    /// Position of this tag in [`Tag::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase tag code, as used in tag markup.
    pub const fn as_str(self) -> &'static str {
        TAG_INFO[self as usize].0
    }

    /// Human-readable description.
    pub const fn description(self) -> &'static str {
        TAG_INFO[self as usize].1
    }

    /// Description folded into a markup-safe identifier.
    pub const fn verbose_name(self) -> &'static str {
        TAG_INFO[self as usize].2
    }

    /// Look up a tag from its verbose markup name.
    pub fn from_verbose_name(name: &str) -> Option<Tag> {
        Tag::ALL.iter().copied().find(|t| t.verbose_name() == name)
    }

    /// Singular, plural and proper nouns.
    pub const fn is_noun(self) -> bool {
        matches!(self, Tag::Nn | Tag::Nns | Tag::Nnp | Tag::Nnps)
    }

    /// Noun modifiers allowed before the head of a noun phrase.
    pub const fn is_noun_modifier(self) -> bool {
        matches!(self, Tag::Vbg | Tag::Jj | Tag::Jjr | Tag::Jjs | Tag::Vbn)
    }

    /// Tags that can extend a noun phrase into a following one
    /// ("bank *of* England", "one *of the* two").
    pub const fn is_phrase_extension(self) -> bool {
        matches!(self, Tag::In | Tag::Det | Tag::Cd)
    }

    /// Adjective, noun, adverb and verb families.
    pub fn is_open_class(self) -> bool {
        let code = self.as_str();
        ["jj", "nn", "rb", "vb"].iter().any(|p| code.starts_with(p))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = TaggerError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Tag::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| TaggerError::invalid_argument(format!("unknown tag: {s}")))
    }
}
