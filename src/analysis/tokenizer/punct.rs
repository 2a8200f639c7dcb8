//! Punctuation-aware English tokenizer.
//!
//! Text is split on whitespace and every fragment is then broken into
//! words and punctuation:
//!
//! - quotes are normalized to `` ` ``, ` `` `, `'` and `''` tokens;
//! - dashes, commas (outside numbers), colons, ellipses, brackets and the
//!   symbols `! ? # $ % ; ~ |` are split off;
//! - contractions are split (`isn't` → `is n't`, `we're` → `we 're`).
//!
//! Periods stay attached; deciding whether a period ends a sentence is the
//! job of [`SentenceBoundaryFilter`](crate::analysis::token_filter::sentence::SentenceBoundaryFilter).
//!
//! # Examples
//!
//! ```
//! use engtag::analysis::tokenizer::{PunctTokenizer, Tokenizer};
//!
//! let tokenizer = PunctTokenizer::new();
//! assert_eq!(tokenizer.tokenize("test,test"), vec!["test", ",", "test"]);
//! assert_eq!(tokenizer.tokenize("123,456"), vec!["123,456"]);
//! assert_eq!(tokenizer.tokenize("isn't so"), vec!["is", "n't", "so"]);
//! ```

use lazy_static::lazy_static;
use regex::Regex;

use super::{Tokenizer, is_word_char};

lazy_static! {
    static ref ONLY_WORD: Regex = Regex::new(r"^\w+$").unwrap();
    static ref NON_WORD_RUN: Regex = Regex::new(r"\W{10,}").unwrap();
    static ref DASHES: Regex = Regex::new(r"--+").unwrap();
    static ref ELLIPSIS: Regex = Regex::new(r"\.\.\.+").unwrap();
    static ref SINGLE_PUNCT: Regex = Regex::new(r"[(){}\[\]!?#$%;~|:]").unwrap();
    static ref CONTRACTION_DMS: Regex = Regex::new(r"([A-Za-z])'([dms])\b").unwrap();
    static ref CONTRACTION_NT: Regex = Regex::new(r"n't\b").unwrap();
    static ref CONTRACTION_VE_LL_RE: Regex = Regex::new(r"'(ve|ll|re)\b").unwrap();
}

/// Splits English text into word and punctuation tokens.
#[derive(Clone, Debug, Default)]
pub struct PunctTokenizer;

impl PunctTokenizer {
    pub fn new() -> Self {
        PunctTokenizer
    }

    /// Split one whitespace-free fragment.
    pub fn split_fragment(&self, fragment: &str) -> Vec<String> {
        if ONLY_WORD.is_match(fragment) {
            return vec![fragment.to_string()];
        }

        let text = NON_WORD_RUN.replace_all(fragment, " ");
        let text = normalize_quotes(&text);
        let text = split_punctuation(&text);
        let text = CONTRACTION_DMS.replace_all(&text, "$1 '$2");
        let text = CONTRACTION_NT.replace_all(&text, " n't");
        let text = CONTRACTION_VE_LL_RE.replace_all(&text, " '$1");

        text.split_whitespace().map(str::to_string).collect()
    }
}

impl Tokenizer for PunctTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .flat_map(|fragment| self.split_fragment(fragment))
            .collect()
    }

    fn name(&self) -> &'static str {
        "punct"
    }
}

/// `word_after[i]` is true when some word character follows position `i`.
fn word_after(chars: &[char]) -> Vec<bool> {
    let mut seen = false;
    let mut flags = vec![false; chars.len()];
    for i in (0..chars.len()).rev() {
        flags[i] = seen;
        seen |= is_word_char(chars[i]);
    }
    flags
}

/// Rewrite quotation marks into the standard quote tokens.
///
/// Each rule is one pass over the output of the previous one.
fn normalize_quotes(text: &str) -> String {
    // Backtick opening a quote: "`" + space.
    let chars: Vec<char> = text.chars().collect();
    let ahead = word_after(&chars);
    let mut out = String::with_capacity(text.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        if c == '`' && chars.get(i + 1) != Some(&'`') && ahead[i] {
            out.push(' ');
        }
    }

    // Double quote opening a quote: " `` ".
    let chars: Vec<char> = out.chars().collect();
    let ahead = word_after(&chars);
    let mut out = String::with_capacity(chars.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        if c == '"' && ahead[i] {
            out.push_str(" `` ");
        } else {
            out.push(c);
        }
    }

    // Apostrophe opening a quote, after a non-word char or at the start.
    // A preceding non-word char belongs to the match, so in a run of
    // apostrophes only every second one opens a quote.
    let chars: Vec<char> = out.chars().collect();
    let ahead = word_after(&chars);
    let mut out = String::with_capacity(chars.len() + 8);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if !is_word_char(c) && chars.get(i + 1) == Some(&'\'') && ahead[i + 1] {
            out.push(c);
            out.push_str(" ` ");
            i += 2;
        } else if i == 0 && c == '\'' && ahead[0] {
            out.push_str(" ` ");
            i += 1;
        } else {
            out.push(c);
            i += 1;
        }
    }

    // Remaining double quotes close a quote.
    let out = out.replace('"', " '' ");

    // Apostrophe closing a quote after a word.
    let chars: Vec<char> = out.chars().collect();
    let mut result = String::with_capacity(chars.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        let closes = c == '\''
            && i > 0
            && is_word_char(chars[i - 1])
            && chars.get(i + 1).is_none_or(|&n| n != '\'' && !is_word_char(n));
        if closes {
            result.push_str(" ' ");
        } else {
            result.push(c);
        }
    }
    result
}

/// Space-separate dashes, commas, colons, ellipses, brackets and symbols.
fn split_punctuation(text: &str) -> String {
    let text = DASHES.replace_all(text, " - ");

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(chars.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        if c == ',' && !chars.get(i + 1).is_some_and(|n| n.is_ascii_digit()) {
            out.push_str(" , ");
        } else {
            out.push(c);
        }
    }

    let out = ELLIPSIS.replace_all(&out, " $0 ");
    SINGLE_PUNCT.replace_all(&out, " $0 ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(text: &str) -> Vec<String> {
        PunctTokenizer::new().tokenize(text)
    }

    #[test]
    fn test_plain_words_unchanged() {
        assert_eq!(tokenize("hello"), vec!["hello"]);
        assert_eq!(tokenize("  the  quick\tfox \n"), vec!["the", "quick", "fox"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_commas() {
        assert_eq!(tokenize("test,test"), vec!["test", ",", "test"]);
        assert_eq!(tokenize("123,456"), vec!["123,456"]);
        assert_eq!(tokenize("cats, dogs"), vec!["cats", ",", "dogs"]);
    }

    #[test]
    fn test_contractions() {
        assert_eq!(tokenize("isn't so"), vec!["is", "n't", "so"]);
        assert_eq!(tokenize("we're all"), vec!["we", "'re", "all"]);
        assert_eq!(tokenize("John's"), vec!["John", "'s"]);
        assert_eq!(tokenize("I'm"), vec!["I", "'m"]);
        assert_eq!(tokenize("they'll"), vec!["they", "'ll"]);
    }

    #[test]
    fn test_quotes() {
        assert_eq!(
            tokenize("\"Hello\" she said"),
            vec!["``", "Hello", "''", "she", "said"]
        );
        assert_eq!(tokenize("'tis"), vec!["`", "tis"]);
        assert_eq!(tokenize("dogs'"), vec!["dogs", "'"]);
        assert_eq!(tokenize("`quoted"), vec!["`", "quoted"]);
    }

    #[test]
    fn test_apostrophe_run_opens_once() {
        assert_eq!(tokenize("''Hello"), vec!["'", "`", "Hello"]);
        assert_eq!(tokenize("('hi')"), vec!["(", "`", "hi", "'", ")"]);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(tokenize("wait--what"), vec!["wait", "-", "what"]);
        assert_eq!(tokenize("note:"), vec!["note", ":"]);
        assert_eq!(tokenize("so..."), vec!["so", "..."]);
        assert_eq!(tokenize("(aside)"), vec!["(", "aside", ")"]);
        assert_eq!(tokenize("$5!"), vec!["$", "5", "!"]);
        assert_eq!(tokenize("a;b"), vec!["a", ";", "b"]);
        assert_eq!(tokenize("well-known"), vec!["well-known"]);
    }

    #[test]
    fn test_periods_stay_attached() {
        assert_eq!(tokenize("end."), vec!["end."]);
        assert_eq!(tokenize("U.S.A."), vec!["U.S.A."]);
    }

    #[test]
    fn test_long_symbol_runs_collapse() {
        assert_eq!(tokenize("a**********b"), vec!["a", "b"]);
    }
}
