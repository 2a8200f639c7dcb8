//! Output formatting for CLI commands.

use std::fmt::Write as _;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::cli::args::{EngtagArgs, OutputFormat};
use crate::error::Result;

/// Plain-text rendering of a command result.
pub trait HumanOutput {
    fn to_human(&self) -> String;
}

/// Result structure for the tag and readable commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaggedText {
    pub text: String,
}

impl HumanOutput for TaggedText {
    fn to_human(&self) -> String {
        self.text.clone()
    }
}

/// Result structure for sentence splitting.
#[derive(Debug, Serialize, Deserialize)]
pub struct Sentences {
    pub sentences: Vec<String>,
}

impl HumanOutput for Sentences {
    fn to_human(&self) -> String {
        self.sentences.join("\n")
    }
}

/// A term and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// Result structure for the counting commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermCounts {
    pub terms: Vec<TermCount>,
}

impl TermCounts {
    /// Most frequent first; ties alphabetically.
    pub fn from_map(counts: AHashMap<String, usize>) -> Self {
        let mut terms: Vec<TermCount> = counts
            .into_iter()
            .map(|(term, count)| TermCount { term, count })
            .collect();
        terms.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
        TermCounts { terms }
    }
}

impl HumanOutput for TermCounts {
    fn to_human(&self) -> String {
        let mut out = String::new();
        for (i, entry) in self.terms.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = write!(out, "{:>6}  {}", entry.count, entry.term);
        }
        out
    }
}

/// Result structure for tag explanation.
#[derive(Debug, Serialize, Deserialize)]
pub struct TagExplanation {
    pub tag: String,
    pub verbose_name: String,
    pub description: String,
}

impl HumanOutput for TagExplanation {
    fn to_human(&self) -> String {
        format!(
            "{} ({}): {}",
            self.tag.to_uppercase(),
            self.verbose_name,
            self.description
        )
    }
}

/// Result structure for snapshot installation.
#[derive(Debug, Serialize, Deserialize)]
pub struct InstallResult {
    pub snapshot: String,
    pub words: usize,
    pub transitions: usize,
}

impl HumanOutput for InstallResult {
    fn to_human(&self) -> String {
        format!(
            "Snapshot: {}\nWords: {}\nTransitions: {}",
            self.snapshot, self.words, self.transitions
        )
    }
}

/// Output a result in the format chosen on the command line.
pub fn output_result<T>(message: &str, result: &T, args: &EngtagArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &EngtagArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    let text = result.to_human();
    if !text.is_empty() {
        println!("{text}");
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &EngtagArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
