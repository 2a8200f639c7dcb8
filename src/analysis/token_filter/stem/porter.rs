//! Porter stemming algorithm implementation.
//!
//! This module implements the original Porter (1980) algorithm for reducing
//! English words to their stems.
//!
//! # Algorithm
//!
//! The Porter stemmer applies a series of rewrite rules in five steps:
//! 1. Plurals and -ed/-ing suffixes, then terminal y → i
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and -ll
//!
//! Each rule is guarded by the *measure* of the remaining stem: the number
//! of vowel-run/consonant-run pairs in it. A `y` counts as a vowel after a
//! consonant and as a consonant after a vowel; a word-initial `y` is always
//! a consonant.
//!
//! Matching is case-sensitive and the input case is preserved. Words
//! shorter than three characters are returned unchanged.
//!
//! # Examples
//!
//! ```
//! use engtag::analysis::token_filter::stem::Stemmer;
//! use engtag::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("gets"), "get");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

const STEP2_SUFFIXES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

const STEP3_SUFFIXES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ou", "ism",
    "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm implementation.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer;

#[inline]
fn is_aeiou(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

#[inline]
fn is_aeiouy(c: char) -> bool {
    is_aeiou(c) || c == 'y'
}

fn ends_with(word: &[char], suffix: &str) -> bool {
    let n = suffix.chars().count();
    word.len() >= n && word[word.len() - n..].iter().copied().eq(suffix.chars())
}

fn strip(word: &[char], suffix: &str) -> Vec<char> {
    word[..word.len() - suffix.chars().count()].to_vec()
}

fn replace(word: &[char], suffix: &str, replacement: &str) -> Vec<char> {
    let mut stem = strip(word, suffix);
    stem.extend(replacement.chars());
    stem
}

/// The longest entry of `suffixes` that `word` ends with.
fn longest_suffix<'a>(word: &[char], suffixes: &[&'a str]) -> Option<&'a str> {
    suffixes
        .iter()
        .copied()
        .filter(|s| ends_with(word, s))
        .max_by_key(|s| s.len())
}

/// The rewrite rule with the longest suffix that `word` ends with.
fn longest_rule(
    word: &[char],
    rules: &[(&'static str, &'static str)],
) -> Option<(&'static str, &'static str)> {
    rules
        .iter()
        .copied()
        .filter(|(s, _)| ends_with(word, s))
        .max_by_key(|(s, _)| s.len())
}

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Split `word` into alternating consonant and vowel runs and count the
    /// vowel→consonant transitions. Also reports whether any vowel run was
    /// found.
    fn measure(&self, word: &[char]) -> (usize, bool) {
        let n = word.len();
        let mut i = 0;
        let mut m = 0;
        let mut has_vowel = false;

        // Leading consonant run. After the first consonant, `y` ends the run.
        if i < n && !is_aeiou(word[i]) {
            i += 1;
            while i < n && !is_aeiouy(word[i]) {
                i += 1;
            }
        }

        while i < n {
            // Vowel run: a vowel (or y), then plain vowels.
            has_vowel = true;
            i += 1;
            while i < n && is_aeiou(word[i]) {
                i += 1;
            }
            if i >= n {
                break;
            }
            // Consonant run: a consonant (y included), then non-y consonants.
            m += 1;
            i += 1;
            while i < n && !is_aeiouy(word[i]) {
                i += 1;
            }
        }

        (m, has_vowel)
    }

    fn m_gt0(&self, word: &[char]) -> bool {
        self.measure(word).0 > 0
    }

    fn m_eq1(&self, word: &[char]) -> bool {
        self.measure(word).0 == 1
    }

    fn m_gt1(&self, word: &[char]) -> bool {
        self.measure(word).0 > 1
    }

    fn has_vowel(&self, word: &[char]) -> bool {
        self.measure(word).1
    }

    /// Whole word is consonant run, one vowel, one final consonant other
    /// than w, x or y (e.g. "hop", "fil").
    fn is_short_cvc(&self, word: &[char]) -> bool {
        let n = word.len();
        if n < 3 || is_aeiou(word[0]) {
            return false;
        }
        let mut i = 1;
        while i < n && !is_aeiouy(word[i]) {
            i += 1;
        }
        i + 2 == n
            && is_aeiouy(word[i])
            && !matches!(word[i + 1], 'a' | 'e' | 'i' | 'o' | 'u' | 'w' | 'x' | 'y')
    }

    fn step1a(&self, word: Vec<char>) -> Vec<char> {
        if ends_with(&word, "sses") || ends_with(&word, "ies") {
            strip(&word, "es")
        } else if ends_with(&word, "s") && word.len() >= 2 && word[word.len() - 2] != 's' {
            strip(&word, "s")
        } else {
            word
        }
    }

    fn step1b(&self, word: Vec<char>) -> Vec<char> {
        if ends_with(&word, "eed") {
            if self.m_gt0(&strip(&word, "eed")) {
                return strip(&word, "d");
            }
            return word;
        }

        let suffix = if ends_with(&word, "ed") {
            "ed"
        } else if ends_with(&word, "ing") {
            "ing"
        } else {
            return word;
        };

        let mut stem = strip(&word, suffix);
        if !self.has_vowel(&stem) {
            return word;
        }

        let n = stem.len();
        if ends_with(&stem, "at") || ends_with(&stem, "bl") || ends_with(&stem, "iz") {
            stem.push('e');
        } else if n >= 2
            && stem[n - 1] == stem[n - 2]
            && !matches!(stem[n - 1], 'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'l' | 's' | 'z')
        {
            stem.pop();
        } else if self.is_short_cvc(&stem) {
            stem.push('e');
        }
        stem
    }

    fn step1c(&self, word: Vec<char>) -> Vec<char> {
        if ends_with(&word, "y") {
            let stem = strip(&word, "y");
            if self.has_vowel(&stem) {
                return replace(&word, "y", "i");
            }
        }
        word
    }

    fn rewrite(&self, word: Vec<char>, rules: &[(&'static str, &'static str)]) -> Vec<char> {
        match longest_rule(&word, rules) {
            Some((suffix, replacement)) if self.m_gt0(&strip(&word, suffix)) => {
                replace(&word, suffix, replacement)
            }
            _ => word,
        }
    }

    fn step2(&self, word: Vec<char>) -> Vec<char> {
        self.rewrite(word, STEP2_SUFFIXES)
    }

    fn step3(&self, word: Vec<char>) -> Vec<char> {
        self.rewrite(word, STEP3_SUFFIXES)
    }

    fn step4(&self, word: Vec<char>) -> Vec<char> {
        if let Some(suffix) = longest_suffix(&word, STEP4_SUFFIXES) {
            let stem = strip(&word, suffix);
            return if self.m_gt1(&stem) { stem } else { word };
        }
        if ends_with(&word, "sion") || ends_with(&word, "tion") {
            let stem = strip(&word, "ion");
            if self.m_gt1(&stem) {
                return stem;
            }
        }
        word
    }

    fn step5(&self, word: Vec<char>) -> Vec<char> {
        let word = if ends_with(&word, "e") {
            let stem = strip(&word, "e");
            if self.m_gt1(&stem) || (self.m_eq1(&stem) && !self.is_short_cvc(&stem)) {
                stem
            } else {
                word
            }
        } else {
            word
        };

        if ends_with(&word, "ll") && self.m_gt1(&word) {
            strip(&word, "l")
        } else {
            word
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let mut chars: Vec<char> = word.chars().collect();
        if chars.len() < 3 {
            return word.to_string();
        }

        let initial_y = chars[0] == 'y';
        if initial_y {
            chars[0] = 'Y';
        }

        let chars = self.step1a(chars);
        let chars = self.step1b(chars);
        let chars = self.step1c(chars);
        let chars = self.step2(chars);
        let chars = self.step3(chars);
        let chars = self.step4(chars);
        let mut chars = self.step5(chars);

        if initial_y && !chars.is_empty() {
            chars[0] = 'y';
        }
        chars.into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
