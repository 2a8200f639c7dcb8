//! Text loader for the lexicon and transition tables.
//!
//! Both tables share one line-oriented format:
//!
//! ```text
//! dog: { nn: 112, vb: 3 }
//! ",": { ppc: 5821 }
//! det: { nn: 0.46, jj: 0.21, nnp: 0.05 }
//! ```
//!
//! The key may be wrapped in double quotes (needed for punctuation keys).
//! Lines that do not parse (bad shape, unknown tag name, bad number) are
//! skipped; loading never stops halfway through a file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::error::{Result, TaggerError};
use crate::lexicon::{Emissions, Lexicon, TransitionTable};
use crate::tag::Tag;

lazy_static! {
    static ref ENTRY_LINE: Regex = Regex::new(r#"^"?([^{"]+)"?:\s*\{\s*(.*?)\s*\}\s*$"#).unwrap();
    static ref PAIR_SEPARATOR: Regex = Regex::new(r",\s*").unwrap();
}

/// Parse one `key: { tag: value, ... }` line.
fn parse_entry(line: &str) -> Option<(String, Vec<(Tag, f64)>)> {
    let caps = ENTRY_LINE.captures(line.trim())?;
    let key = caps.get(1)?.as_str().trim();
    if key.is_empty() {
        return None;
    }

    let body = caps.get(2)?.as_str();
    let mut pairs = Vec::new();
    for item in PAIR_SEPARATOR.split(body).filter(|s| !s.trim().is_empty()) {
        let (tag, value) = item.split_once(':')?;
        let tag: Tag = tag.trim().trim_matches('"').parse().ok()?;
        let value: f64 = value.trim().parse().ok()?;
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        pairs.push((tag, value));
    }
    if pairs.is_empty() {
        return None;
    }

    Some((key.to_string(), pairs))
}

/// Read a word → tag table.
pub fn parse_lexicon<R: BufRead>(reader: R) -> Result<Lexicon> {
    let mut lexicon = Lexicon::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_entry(&line) {
            Some((word, pairs)) => {
                lexicon.insert_emissions(word, pairs.into_iter().collect::<Emissions>());
            }
            None => debug!("skipping malformed lexicon line {}: {line}", line_num + 1),
        }
    }
    Ok(lexicon)
}

/// Read a tag → tag probability table.
pub fn parse_transitions<R: BufRead>(reader: R) -> Result<TransitionTable> {
    let mut transitions = TransitionTable::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let parsed = parse_entry(&line).and_then(|(key, pairs)| {
            let prev: Tag = key.parse().ok()?;
            if pairs.iter().any(|(_, p)| *p > 1.0) {
                return None;
            }
            Some((prev, pairs))
        });
        match parsed {
            Some((prev, pairs)) => {
                for (next, probability) in pairs {
                    transitions.set(prev, next, probability);
                }
            }
            None => debug!("skipping malformed transition line {}: {line}", line_num + 1),
        }
    }
    Ok(transitions)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| TaggerError::lexicon(format!("cannot open {}: {e}", path.display())))
}

pub fn load_lexicon<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
    parse_lexicon(open(path.as_ref())?)
}

pub fn load_transitions<P: AsRef<Path>>(path: P) -> Result<TransitionTable> {
    parse_transitions(open(path.as_ref())?)
}
