//! Sentence boundary detection.
//!
//! The tokenizer leaves periods attached to words. This filter decides
//! which of them end a sentence and splits those off as separate `.`
//! tokens, leaving abbreviations ("Dr.", "Calif.", "U.S.") intact.
//!
//! # Examples
//!
//! ```
//! use engtag::analysis::token_filter::Filter;
//! use engtag::analysis::token_filter::sentence::SentenceBoundaryFilter;
//!
//! let filter = SentenceBoundaryFilter::new();
//! let tokens = ["Ask", "Dr.", "Smith.", "He", "knows."]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! assert_eq!(
//!     filter.filter(tokens),
//!     vec!["Ask", "Dr.", "Smith", ".", "He", "knows", "."]
//! );
//! ```

use ahash::AHashSet;
use lazy_static::lazy_static;
use regex::Regex;

use super::Filter;

const PEOPLE: &[&str] = &[
    "jr", "mr", "ms", "mrs", "dr", "prof", "esq", "sr", "sen", "sens", "rep", "reps", "gov",
    "attys", "supt", "det", "mssrs", "rev",
];
const ARMY: &[&str] = &["col", "gen", "lt", "cmdr", "adm", "capt", "sgt", "cpl", "maj", "brig"];
const INSTITUTIONS: &[&str] = &["dept", "univ", "assn", "bros", "ph.d"];
const PLACES: &[&str] = &[
    "arc", "al", "ave", "blvd", "bld", "cl", "ct", "cres", "exp", "expy", "dist", "mt", "mtn",
    "ft", "fy", "fwy", "hwy", "hway", "la", "pde", "pd", "plz", "pl", "rd", "st", "tce",
];
const COMPANIES: &[&str] = &["mfg", "inc", "ltd", "co", "corp"];
const STATES: &[&str] = &[
    "ala", "ariz", "ark", "cal", "calif", "colo", "col", "conn", "del", "fed", "fla", "ga", "ida",
    "id", "ill", "ind", "ia", "kans", "kan", "ken", "ky", "la", "me", "md", "is", "mass", "mich",
    "minn", "miss", "mo", "mont", "neb", "nebr", "nev", "mex", "okla", "ok", "ore", "penna",
    "penn", "pa", "dak", "tenn", "tex", "ut", "vt", "va", "wash", "wis", "wisc", "wy", "wyo",
    "usafa", "alta", "man", "ont", "que", "sask", "yuk",
];
const MONTHS: &[&str] = &[
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];
const MISC: &[&str] = &["vs", "etc", "no", "esp"];

lazy_static! {
    static ref ABBREVIATIONS: AHashSet<&'static str> = [
        PEOPLE, ARMY, INSTITUTIONS, PLACES, COMPANIES, STATES, MONTHS, MISC,
    ]
    .iter()
    .flat_map(|list| list.iter().copied())
    .collect();
    static ref SINGLE_LETTER: Regex = Regex::new(r"(?i)^[a-z]$").unwrap();
    static ref LETTER_DOTS: Regex = Regex::new(r"(?i)[a-z](?:\.[a-z])+$").unwrap();
    static ref FINAL_PERIOD: Regex = Regex::new(r"^(.*\w)\.$").unwrap();
}

/// Whether `stem` (a token without its trailing period) is an
/// abbreviation whose period must stay attached.
pub fn is_abbreviation(stem: &str) -> bool {
    ABBREVIATIONS.contains(stem.to_lowercase().as_str())
        || SINGLE_LETTER.is_match(stem)
        || LETTER_DOTS.is_match(stem)
}

/// A token following a sentence-final period starts with a capital
/// letter or with punctuation.
fn starts_sentence(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| c.is_uppercase() || !(c.is_alphanumeric() || c == '_'))
}

/// Splits sentence-final periods off their words.
#[derive(Clone, Debug, Default)]
pub struct SentenceBoundaryFilter;

impl SentenceBoundaryFilter {
    pub fn new() -> Self {
        SentenceBoundaryFilter
    }
}

impl Filter for SentenceBoundaryFilter {
    fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        let mut words = Vec::with_capacity(tokens.len() + tokens.len() / 8);

        for (i, token) in tokens.iter().enumerate() {
            let next_starts_sentence = tokens.get(i + 1).is_some_and(|n| starts_sentence(n));
            if next_starts_sentence {
                if let Some(stem) = token.strip_suffix('.') {
                    if !stem.is_empty() && !is_abbreviation(stem) {
                        words.push(stem.to_string());
                        words.push(".".to_string());
                        continue;
                    }
                }
            }
            words.push(token.clone());
        }

        // The last word always ends its sentence.
        if let Some(last) = words.last() {
            if let Some(stem) = FINAL_PERIOD.captures(last).and_then(|c| c.get(1)) {
                let stem = stem.as_str().to_string();
                words.pop();
                words.push(stem);
                words.push(".".to_string());
            }
        }

        words
    }

    fn name(&self) -> &'static str {
        "sentence_boundary"
    }
}
