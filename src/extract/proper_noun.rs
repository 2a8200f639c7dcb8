//! Acronym resolution for proper nouns.

use ahash::AHashMap;

use crate::analysis::tokenizer::is_word_char;

/// Naive acronym of a multi-word name: the first character of every
/// purely alphanumeric word ("British Broadcasting Corporation" → "BBC").
pub fn acronym(name: &str) -> Option<String> {
    let acronym: String = name
        .split_whitespace()
        .filter(|word| word.chars().all(is_word_char))
        .filter_map(|word| word.chars().next())
        .collect();
    if acronym.is_empty() { None } else { Some(acronym) }
}

/// Fold the counts of acronyms into the names they abbreviate.
///
/// Only names of three or more words are considered. When the acronym of
/// such a name is itself a key, its count moves to the full name and the
/// acronym key is removed. Names are visited in sorted order, so when two
/// names share an acronym the first one in sort order takes it.
pub fn fold_acronyms(counts: &mut AHashMap<String, usize>) {
    let mut names: Vec<String> = counts
        .keys()
        .filter(|k| k.split_whitespace().count() > 2)
        .cloned()
        .collect();
    names.sort();

    for name in names {
        let Some(short) = acronym(&name) else {
            continue;
        };
        if short == name {
            continue;
        }
        if let Some(count) = counts.remove(&short) {
            if let Some(total) = counts.get_mut(&name) {
                *total += count;
            }
        }
    }
}
