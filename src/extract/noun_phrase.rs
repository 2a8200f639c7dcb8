//! Noun phrase decomposition.
//!
//! Every maximal noun phrase is broken down into all of its trailing
//! sub-phrases, so "big fat cat" counts towards "big fat cat", "fat cat"
//! and "cat". Phrases joined by prepositions, determiners or numbers
//! ("bank of England") are counted whole and then decomposed piecewise.

use std::ops::Range;

use ahash::AHashMap;

use crate::analysis::token::TaggedToken;
use crate::extract::grammar::find_noun_phrases;
use crate::markup::surface;
use crate::tag::Tag;

/// Raw phrase occurrences in `tokens`, keyed by surface string.
///
/// No length limit, stemming or weighting is applied here.
pub fn phrase_occurrences(tokens: &[TaggedToken]) -> AHashMap<String, usize> {
    let tags: Vec<Tag> = tokens.iter().map(|t| t.tag).collect();
    let mut found: AHashMap<String, usize> = AHashMap::new();

    for span in find_noun_phrases(&tags) {
        let phrase = &tokens[span];
        if phrase.iter().any(|t| t.tag.is_phrase_extension()) {
            *found.entry(surface(phrase)).or_insert(0) += 1;
        }

        for part in split_on_extensions(phrase) {
            let words = &phrase[part];
            for start in 0..words.len() {
                let rest = &words[start..];
                if rest.len() > 1 {
                    *found.entry(surface(rest)).or_insert(0) += 1;
                }
                if rest[0].is_noun() {
                    *found.entry(rest[0].text.clone()).or_insert(0) += 1;
                }
            }
        }
    }

    found
}

/// Sub-spans of `phrase` between runs of preposition, determiner and
/// cardinal tokens. Empty sub-spans are dropped.
fn split_on_extensions(phrase: &[TaggedToken]) -> Vec<Range<usize>> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (i, token) in phrase.iter().enumerate() {
        if token.tag.is_phrase_extension() {
            if start < i {
                parts.push(start..i);
            }
            start = i + 1;
        }
    }
    if start < phrase.len() {
        parts.push(start..phrase.len());
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(pairs: &[(&str, Tag)]) -> Vec<TaggedToken> {
        pairs.iter().map(|(w, t)| TaggedToken::new(*w, *t)).collect()
    }

    #[test]
    fn test_big_fat_cat() {
        let found = phrase_occurrences(&tokens(&[
            ("the", Tag::Det),
            ("big", Tag::Jj),
            ("fat", Tag::Jj),
            ("cat", Tag::Nn),
        ]));
        assert_eq!(found.len(), 3);
        assert_eq!(found["big fat cat"], 1);
        assert_eq!(found["fat cat"], 1);
        assert_eq!(found["cat"], 1);
    }

    #[test]
    fn test_extended_phrase() {
        let found = phrase_occurrences(&tokens(&[
            ("Bank", Tag::Nnp),
            ("of", Tag::In),
            ("England", Tag::Nnp),
        ]));
        assert_eq!(found["Bank of England"], 1);
        assert_eq!(found["Bank"], 1);
        assert_eq!(found["England"], 1);
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_leading_number_counts_as_extension() {
        let found = phrase_occurrences(&tokens(&[("three", Tag::Cd), ("dogs", Tag::Nns)]));
        assert_eq!(found["three dogs"], 1);
        assert_eq!(found["dogs"], 1);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_repeated_phrases_accumulate() {
        let found = phrase_occurrences(&tokens(&[
            ("red", Tag::Jj),
            ("car", Tag::Nn),
            ("and", Tag::Cc),
            ("red", Tag::Jj),
            ("car", Tag::Nn),
        ]));
        assert_eq!(found["red car"], 2);
        assert_eq!(found["car"], 2);
        assert!(!found.contains_key("red"));
    }

    #[test]
    fn test_split_on_extensions() {
        let phrase = tokens(&[
            ("one", Tag::Cd),
            ("city", Tag::Nn),
            ("in", Tag::In),
            ("the", Tag::Det),
            ("north", Tag::Nn),
        ]);
        assert_eq!(split_on_extensions(&phrase), vec![1..2, 4..5]);
    }
}
