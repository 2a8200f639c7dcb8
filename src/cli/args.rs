//! Command line argument parsing for the engtag CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// engtag - English part-of-speech tagger
#[derive(Parser, Debug, Clone)]
#[command(name = "engtag")]
#[command(about = "Tag English text with parts of speech and extract noun phrases")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct EngtagArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Directory holding pos_words.hash, pos_tags.hash and the snapshot
    #[arg(
        short = 'l',
        long,
        env = "ENGTAG_LEXICON_DIR",
        default_value = "lexicon",
        global = true
    )]
    pub lexicon_dir: PathBuf,

    /// Tagger configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl EngtagArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print text as tag markup
    Tag(MarkupArgs),

    /// Print text as word/TAG pairs
    Readable(MarkupArgs),

    /// Split text into sentences
    Sentences(TextArgs),

    /// Count nouns
    Nouns(TextArgs),

    /// Count noun phrases
    Phrases(PhraseArgs),

    /// Count proper nouns, folding acronyms into full names
    #[command(name = "proper-nouns")]
    ProperNouns(TextArgs),

    /// Count nouns or noun phrases, depending on --longest-noun-phrase
    Words(TextArgs),

    /// Build the binary snapshot from the text lexicon
    Install(InstallArgs),

    /// Describe a tag
    Explain(ExplainArgs),
}

/// Tagger options that override the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct TaggerOptions {
    /// Stem extracted terms
    #[arg(long)]
    pub stem: bool,

    /// Let open-class tags guess for unseen word/tag pairs
    #[arg(long)]
    pub relax: bool,

    /// Multiply phrase counts by phrase length
    #[arg(long)]
    pub weight_noun_phrases: bool,

    /// Longest noun phrase to report, in words
    #[arg(long, value_name = "WORDS")]
    pub longest_noun_phrase: Option<usize>,

    /// Strip HTML/XML markup from the input
    #[arg(long)]
    pub strip_markup: bool,

    /// Tag for completely unknown words
    #[arg(long, value_name = "TAG")]
    pub unknown_word_tag: Option<String>,
}

/// Input text source.
#[derive(Args, Debug, Clone)]
pub struct TextArgs {
    /// Input file (reads standard input when omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub options: TaggerOptions,
}

/// Arguments for the markup-producing commands
#[derive(Args, Debug, Clone)]
pub struct MarkupArgs {
    #[command(flatten)]
    pub text: TextArgs,

    /// Use verbose tag names
    #[arg(long)]
    pub verbose_tags: bool,
}

/// Arguments for noun phrase extraction
#[derive(Args, Debug, Clone)]
pub struct PhraseArgs {
    #[command(flatten)]
    pub text: TextArgs,

    /// Only report maximal noun phrases
    #[arg(long)]
    pub max: bool,
}

/// Arguments for building a snapshot
#[derive(Args, Debug, Clone)]
pub struct InstallArgs {
    /// Where to write the snapshot (defaults to the lexicon directory)
    #[arg(short, long, value_name = "SNAPSHOT_FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for explaining a tag
#[derive(Args, Debug, Clone)]
pub struct ExplainArgs {
    /// Tag code, e.g. nnp
    #[arg(value_name = "TAG")]
    pub tag: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
