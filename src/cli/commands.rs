//! Command implementations for the engtag CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::lexicon::{SNAPSHOT_FILE, Tables, snapshot};
use crate::tag::Tag;
use crate::tagger::{Tagger, TaggerConfig};

/// Execute a CLI command.
pub fn execute_command(args: EngtagArgs) -> Result<()> {
    match &args.command {
        Command::Tag(markup_args) => tag(markup_args, &args),
        Command::Readable(markup_args) => readable(markup_args, &args),
        Command::Sentences(text_args) => sentences(text_args, &args),
        Command::Nouns(text_args) => nouns(text_args, &args),
        Command::Phrases(phrase_args) => phrases(phrase_args, &args),
        Command::ProperNouns(text_args) => proper_nouns(text_args, &args),
        Command::Words(text_args) => words(text_args, &args),
        Command::Install(install_args) => install(install_args, &args),
        Command::Explain(explain_args) => explain(explain_args, &args),
    }
}

/// Build the tagger configuration: the config file first, then flags.
pub fn build_config(options: &TaggerOptions, cli_args: &EngtagArgs) -> Result<TaggerConfig> {
    let mut config = match &cli_args.config {
        Some(path) => TaggerConfig::from_json_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => TaggerConfig::default(),
    };

    if options.stem {
        config = config.with_stem(true);
    }
    if options.relax {
        config = config.with_relax(true);
    }
    if options.weight_noun_phrases {
        config = config.with_weight_noun_phrases(true);
    }
    if options.strip_markup {
        config = config.with_strip_markup(true);
    }
    if let Some(words) = options.longest_noun_phrase {
        config = config.with_longest_noun_phrase(words);
    }
    if let Some(name) = &options.unknown_word_tag {
        let tag: Tag = name.parse()?;
        config = config.with_unknown_word_tag(tag);
    }
    Ok(config)
}

fn load_tagger(options: &TaggerOptions, cli_args: &EngtagArgs) -> Result<Tagger> {
    let config = build_config(options, cli_args)?;
    debug!("tagger config: {config:?}");
    let tables = Tables::open(&cli_args.lexicon_dir)
        .with_context(|| format!("loading lexicon from {}", cli_args.lexicon_dir.display()))?;
    Ok(Tagger::new(Arc::new(tables), config))
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading standard input")?;
            Ok(text)
        }
    }
}

/// Tag the input and return it as markup; empty for blank input.
fn tagged_markup(tagger: &Tagger, text: &str) -> String {
    tagger.add_tags(text, false).unwrap_or_default()
}

fn tag(args: &MarkupArgs, cli_args: &EngtagArgs) -> Result<()> {
    let tagger = load_tagger(&args.text.options, cli_args)?;
    let text = read_input(args.text.input.as_deref())?;
    let markup = tagger
        .add_tags(&text, args.verbose_tags)
        .unwrap_or_default();
    output_result("Tagged text:", &TaggedText { text: markup }, cli_args)?;
    Ok(())
}

fn readable(args: &MarkupArgs, cli_args: &EngtagArgs) -> Result<()> {
    let tagger = load_tagger(&args.text.options, cli_args)?;
    let text = read_input(args.text.input.as_deref())?;
    let readable = tagger
        .get_readable(&text, args.verbose_tags)
        .unwrap_or_default();
    output_result("Tagged text:", &TaggedText { text: readable }, cli_args)?;
    Ok(())
}

fn sentences(args: &TextArgs, cli_args: &EngtagArgs) -> Result<()> {
    let tagger = load_tagger(&args.options, cli_args)?;
    let text = read_input(args.input.as_deref())?;
    let sentences = tagger.get_sentences(&text).unwrap_or_default();
    info!("found {} sentences", sentences.len());
    output_result("Sentences:", &Sentences { sentences }, cli_args)?;
    Ok(())
}

fn nouns(args: &TextArgs, cli_args: &EngtagArgs) -> Result<()> {
    let tagger = load_tagger(&args.options, cli_args)?;
    let text = read_input(args.input.as_deref())?;
    let markup = tagged_markup(&tagger, &text);
    let counts = tagger.get_nouns(&markup).unwrap_or_default();
    output_result("Nouns:", &TermCounts::from_map(counts), cli_args)?;
    Ok(())
}

fn phrases(args: &PhraseArgs, cli_args: &EngtagArgs) -> Result<()> {
    let tagger = load_tagger(&args.text.options, cli_args)?;
    let text = read_input(args.text.input.as_deref())?;
    let markup = tagged_markup(&tagger, &text);
    let counts = if args.max {
        tagger.get_max_noun_phrases(&markup)
    } else {
        tagger.get_noun_phrases(&markup)
    }
    .unwrap_or_default();
    output_result("Noun phrases:", &TermCounts::from_map(counts), cli_args)?;
    Ok(())
}

fn proper_nouns(args: &TextArgs, cli_args: &EngtagArgs) -> Result<()> {
    let tagger = load_tagger(&args.options, cli_args)?;
    let text = read_input(args.input.as_deref())?;
    let markup = tagged_markup(&tagger, &text);
    let counts = tagger.get_proper_nouns(&markup).unwrap_or_default();
    output_result("Proper nouns:", &TermCounts::from_map(counts), cli_args)?;
    Ok(())
}

fn words(args: &TextArgs, cli_args: &EngtagArgs) -> Result<()> {
    let tagger = load_tagger(&args.options, cli_args)?;
    let text = read_input(args.input.as_deref())?;
    let counts = tagger.get_words(&text).unwrap_or_default();
    output_result("Words:", &TermCounts::from_map(counts), cli_args)?;
    Ok(())
}

fn install(args: &InstallArgs, cli_args: &EngtagArgs) -> Result<()> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| cli_args.lexicon_dir.join(SNAPSHOT_FILE));
    let tables = snapshot::install(&cli_args.lexicon_dir, Some(&output))
        .with_context(|| format!("installing from {}", cli_args.lexicon_dir.display()))?;

    let result = InstallResult {
        snapshot: output.display().to_string(),
        words: tables.lexicon().len(),
        transitions: tables.transitions().len(),
    };
    output_result("Snapshot installed:", &result, cli_args)?;
    Ok(())
}

fn explain(args: &ExplainArgs, cli_args: &EngtagArgs) -> Result<()> {
    let tag: Tag = args.tag.parse()?;
    let result = TagExplanation {
        tag: tag.as_str().to_string(),
        verbose_name: tag.verbose_name().to_string(),
        description: tag.description().to_string(),
    };
    output_result("Tag:", &result, cli_args)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    fn options(argv: &[&str]) -> (TaggerOptions, EngtagArgs) {
        let args = EngtagArgs::try_parse_from(argv).unwrap();
        let options = match &args.command {
            Command::Nouns(text_args) => text_args.options.clone(),
            _ => panic!("Expected Nouns command"),
        };
        (options, args)
    }

    #[test]
    fn test_flags_override_defaults() {
        let (opts, args) = options(&[
            "engtag",
            "nouns",
            "--stem",
            "--longest-noun-phrase",
            "2",
            "--unknown-word-tag",
            "nnp",
        ]);
        let config = build_config(&opts, &args).unwrap();
        assert!(config.stem);
        assert!(!config.relax);
        assert_eq!(config.longest_noun_phrase, 2);
        assert_eq!(config.unknown_word_tag, Some(Tag::Nnp));
    }

    #[test]
    fn test_flags_apply_over_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"relax": true, "longest_noun_phrase": 7}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let (opts, args) = options(&["engtag", "--config", path.as_str(), "nouns", "--stem"]);
        let config = build_config(&opts, &args).unwrap();
        assert!(config.relax);
        assert!(config.stem);
        assert_eq!(config.longest_noun_phrase, 7);
    }

    #[test]
    fn test_bad_unknown_tag_is_rejected() {
        let (opts, args) = options(&["engtag", "nouns", "--unknown-word-tag", "zzz"]);
        assert!(build_config(&opts, &args).is_err());
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "The cat sat.").unwrap();
        assert_eq!(read_input(Some(file.path())).unwrap(), "The cat sat.");
        assert!(read_input(Some(Path::new("/no/such/engtag/input"))).is_err());
    }

    #[test]
    fn test_blank_input_counts_nothing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(crate::lexicon::WORDS_FILE), "cat: { nn: 3 }\n").unwrap();
        fs::write(dir.path().join(crate::lexicon::TAGS_FILE), "pp: { nn: 0.5 }\n").unwrap();
        let input = dir.path().join("blank.txt");
        fs::write(&input, " \n").unwrap();
        let dir_arg = dir.path().to_str().unwrap().to_string();
        let input_arg = input.to_str().unwrap().to_string();

        for command in ["nouns", "phrases", "proper-nouns"] {
            let argv = ["engtag", "-q", "-l", dir_arg.as_str(), command, input_arg.as_str()];
            let args = EngtagArgs::try_parse_from(argv).unwrap();
            execute_command(args).unwrap();
        }

        let tagger = Tagger::new(Arc::new(Tables::empty()), TaggerConfig::default());
        assert_eq!(tagged_markup(&tagger, "  "), "");
    }

    #[test]
    fn test_install_writes_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(crate::lexicon::WORDS_FILE), "cat: { nn: 3 }\n").unwrap();
        fs::write(dir.path().join(crate::lexicon::TAGS_FILE), "pp: { nn: 0.5 }\n").unwrap();
        let dir_arg = dir.path().to_str().unwrap().to_string();

        let argv = ["engtag", "-q", "-l", dir_arg.as_str(), "install"];
        let args = EngtagArgs::try_parse_from(argv).unwrap();
        execute_command(args).unwrap();
        assert!(dir.path().join(SNAPSHOT_FILE).is_file());
    }
}
