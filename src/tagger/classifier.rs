//! Word classification: mapping a token to the key the decoder looks up.
//!
//! Known words map to themselves (or to their lowercased-first-letter form
//! when only that is in the lexicon). Unknown words are sorted into
//! morphological classes such as `-ing-` or `*NUM*`, which the lexicon
//! carries as pseudo-words with emission weights of their own.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

use crate::lexicon::Lexicon;
use crate::tag::Tag;

/// Words the classifier could not place at all.
pub const UNKNOWN: &str = "-unknown-";

/// Words made only of symbols.
pub const SYMBOL: &str = "-sym-";

lazy_static! {
    static ref LEFT_BRACKET: Regex = Regex::new(r"[({\[]").unwrap();
    static ref RIGHT_BRACKET: Regex = Regex::new(r"[)}\]]").unwrap();
    static ref TRAILING_NUMBER: Regex = Regex::new(r"-?(?:\d+(?:\.\d*)?|\.\d+)\z").unwrap();
    static ref NUMBER_CONSTRUCT: Regex = Regex::new(r"\A\d+[\d/:-]+\d\z").unwrap();
    static ref ORDINAL: Regex = Regex::new(r"\A-?\d+\w+\z").unwrap();
    static ref ABBREVIATION: Regex = Regex::new(r"\A[A-Z][A-Z.-]*\z").unwrap();
    static ref HYPHENATED: Regex = Regex::new(r"\w-\w").unwrap();
    static ref HYPHEN_SUFFIX: Regex = Regex::new(r"-([^-]+)\z").unwrap();
    static ref ONLY_SYMBOLS: Regex = Regex::new(r"\A\W+\z").unwrap();
}

const SUFFIX_CLASSES: &[(&str, &str)] = &[
    ("ing", "-ing-"),
    ("s", "-s-"),
    ("tion", "-tion-"),
    ("ly", "-ly-"),
    ("ed", "-ed-"),
];

/// `word` with its first character lowercased.
pub fn lowercase_first(word: &str) -> Cow<'_, str> {
    change_first(word, |c| c.is_lowercase(), |c| c.to_lowercase().collect())
}

/// `word` with its first character uppercased.
pub fn uppercase_first(word: &str) -> Cow<'_, str> {
    change_first(word, |c| c.is_uppercase(), |c| c.to_uppercase().collect())
}

fn change_first<'a>(
    word: &'a str,
    already: impl Fn(char) -> bool,
    convert: impl Fn(char) -> String,
) -> Cow<'a, str> {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if !already(first) => {
            let converted = convert(first);
            if converted.len() == first.len_utf8() && converted.starts_with(first) {
                Cow::Borrowed(word)
            } else {
                Cow::Owned(converted + chars.as_str())
            }
        }
        _ => Cow::Borrowed(word),
    }
}

/// The lexicon key for `word`.
pub fn classify_word<'a>(lexicon: &Lexicon, word: &'a str) -> Cow<'a, str> {
    if lexicon.contains(word) {
        return Cow::Borrowed(word);
    }
    let lower = lowercase_first(word);
    if lexicon.contains(&lower) {
        return lower;
    }
    Cow::Borrowed(classify_unknown_word(lexicon, word))
}

/// Morphological class of a word that is not in the lexicon.
pub fn classify_unknown_word(lexicon: &Lexicon, word: &str) -> &'static str {
    if LEFT_BRACKET.is_match(word) {
        "*LRB*"
    } else if RIGHT_BRACKET.is_match(word) {
        "*RRB*"
    } else if TRAILING_NUMBER.is_match(word) || NUMBER_CONSTRUCT.is_match(word) {
        "*NUM*"
    } else if ORDINAL.is_match(word) {
        "*ORD*"
    } else if ABBREVIATION.is_match(word) {
        "-abr-"
    } else if HYPHENATED.is_match(word) {
        let adjective_suffix = HYPHEN_SUFFIX
            .captures(word)
            .and_then(|c| c.get(1))
            .and_then(|suffix| lexicon.get(suffix.as_str()))
            .is_some_and(|emissions| emissions.contains(Tag::Jj));
        if adjective_suffix { "-hyp-adj-" } else { "-hyp-" }
    } else if ONLY_SYMBOLS.is_match(word) {
        SYMBOL
    } else if uppercase_first(word) == word {
        "-cap-"
    } else {
        SUFFIX_CLASSES
            .iter()
            .find(|(suffix, _)| word.ends_with(suffix))
            .map_or(UNKNOWN, |&(_, class)| class)
    }
}
