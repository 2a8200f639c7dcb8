//! Maximal noun phrase grammar.
//!
//! A maximal noun phrase (MNP) is
//!
//! ```text
//! cd? mod* noun+ ( in* det? cd? mod* noun+ )*
//! ```
//!
//! where `mod` is one of `vbg jj jjr jjs vbn` and `noun` one of
//! `nn nns nnp nnps`. The grammar is compiled by hand into the automaton
//! below and matched directly against tags, leftmost-longest and without
//! overlap.

use std::ops::Range;

use crate::tag::Tag;

/// What the grammar cares about in a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Noun,
    Modifier,
    Cardinal,
    Preposition,
    Determiner,
    Other,
}

impl From<Tag> for Class {
    fn from(tag: Tag) -> Self {
        match tag {
            t if t.is_noun() => Class::Noun,
            t if t.is_noun_modifier() => Class::Modifier,
            Tag::Cd => Class::Cardinal,
            Tag::In => Class::Preposition,
            Tag::Det => Class::Determiner,
            _ => Class::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    /// Leading cardinal or modifiers, no noun yet.
    Premodified,
    /// After a noun; the only accepting state.
    Noun,
    /// After one or more prepositions.
    Preposition,
    /// After an extension's determiner.
    Determiner,
    /// After an extension's cardinal.
    Cardinal,
    /// After an extension's modifiers.
    Modified,
}

impl State {
    fn next(self, class: Class) -> Option<State> {
        use Class as C;
        use State as S;

        match (self, class) {
            (S::Start, C::Cardinal | C::Modifier) => Some(S::Premodified),
            (S::Premodified, C::Modifier) => Some(S::Premodified),
            (S::Noun, C::Preposition) | (S::Preposition, C::Preposition) => Some(S::Preposition),
            (S::Noun | S::Preposition, C::Determiner) => Some(S::Determiner),
            (S::Noun | S::Preposition | S::Determiner, C::Cardinal) => Some(S::Cardinal),
            (S::Noun | S::Preposition | S::Determiner | S::Cardinal | S::Modified, C::Modifier) => {
                Some(S::Modified)
            }
            (_, C::Noun) => Some(S::Noun),
            _ => None,
        }
    }

    fn is_accepting(self) -> bool {
        self == State::Noun
    }
}

/// End (exclusive) of the longest phrase starting at `start`.
fn longest_match(tags: &[Tag], start: usize) -> Option<usize> {
    let mut state = State::Start;
    let mut end = None;
    for (i, &tag) in tags.iter().enumerate().skip(start) {
        match state.next(Class::from(tag)) {
            Some(next) => state = next,
            None => break,
        }
        if state.is_accepting() {
            end = Some(i + 1);
        }
    }
    end
}

/// Spans of all maximal noun phrases in `tags`, in order.
pub fn find_noun_phrases(tags: &[Tag]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut i = 0;
    while i < tags.len() {
        match longest_match(tags, i) {
            Some(end) => {
                spans.push(i..end);
                i = end;
            }
            None => i += 1,
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;

    fn letter(tag: Tag) -> char {
        match Class::from(tag) {
            Class::Noun => 'N',
            Class::Modifier => 'J',
            Class::Cardinal => 'C',
            Class::Preposition => 'I',
            Class::Determiner => 'D',
            Class::Other => 'X',
        }
    }

    #[test]
    fn test_simple_phrases() {
        use Tag::*;
        assert_eq!(find_noun_phrases(&[Jj, Jj, Nn]), vec![0..3]);
        assert_eq!(find_noun_phrases(&[Det, Jj, Nn, Vbz, Nns]), vec![1..3, 4..5]);
        assert_eq!(find_noun_phrases(&[Nn, In, Det, Nnp]), vec![0..4]);
        assert_eq!(find_noun_phrases(&[Cd, Nns]), vec![0..2]);
        assert!(find_noun_phrases(&[Det, Jj, Vb]).is_empty());
        assert!(find_noun_phrases(&[]).is_empty());
    }

    #[test]
    fn test_dangling_extension_is_not_included() {
        use Tag::*;
        // "bank of the" with no following noun stops at "bank".
        assert_eq!(find_noun_phrases(&[Nn, In, Det, Vb]), vec![0..1]);
        assert_eq!(find_noun_phrases(&[Nn, Jj, In, Nn]), vec![0..1, 3..4]);
    }

    /// Compare the automaton with the grammar written as a regex over one
    /// letter per tag class, for every sequence up to length 6.
    #[test]
    fn test_matches_reference_grammar() {
        let reference = Regex::new(r"C?J*N+(?:I*D?C?J*N+)*").unwrap();
        let alphabet = [Tag::Nn, Tag::Jj, Tag::Cd, Tag::In, Tag::Det, Tag::Vb];

        for len in 0..=6 {
            let total = alphabet.len().pow(len as u32);
            for mut n in 0..total {
                let mut tags = Vec::with_capacity(len);
                for _ in 0..len {
                    tags.push(alphabet[n % alphabet.len()]);
                    n /= alphabet.len();
                }
                let letters: String = tags.iter().map(|t| letter(*t)).collect();
                let expected: Vec<Range<usize>> =
                    reference.find_iter(&letters).map(|m| m.range()).collect();
                assert_eq!(find_noun_phrases(&tags), expected, "{letters}");
            }
        }
    }
}
