//! End-to-end tagging over lexicon files on disk.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use engtag::lexicon::{SNAPSHOT_FILE, TAGS_FILE, Tables, WORDS_FILE, snapshot};
use engtag::markup;
use engtag::tag::Tag;
use engtag::tagger::{Tagger, TaggerConfig};
use tempfile::TempDir;

const WORDS: &str = r#"the: { det: 100 }
a: { det: 80 }
"Mr.": { nnp: 10 }
Smith: { nnp: 3 }
British: { nnp: 5 }
Broadcasting: { nnp: 2, vbg: 1 }
Corporation: { nnp: 3 }
BBC: { nnp: 4 }
and: { cc: 50 }
reported: { vbd: 10 }
news: { nn: 10 }
".": { pp: 100 }
"#;

const TAGS: &str = "\
pp: { det: 0.4, nnp: 0.3 }
det: { nnp: 0.3, nn: 0.5 }
nnp: { nnp: 0.4, cc: 0.2, vbd: 0.3, pp: 0.1 }
cc: { det: 0.5, nnp: 0.3 }
vbd: { det: 0.4, nn: 0.2, pp: 0.2 }
nn: { pp: 0.3 }
";

const TEXT: &str = "The British Broadcasting Corporation and the BBC reported the news.";

fn lexicon_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(WORDS_FILE), WORDS).unwrap();
    fs::write(dir.path().join(TAGS_FILE), TAGS).unwrap();
    dir
}

fn tagger(dir: &Path, config: TaggerConfig) -> Tagger {
    Tagger::new(Arc::new(Tables::open(dir).unwrap()), config)
}

#[test]
fn test_tag_from_text_tables() {
    let dir = lexicon_dir();
    let tagger = tagger(dir.path(), TaggerConfig::default());

    let tags: Vec<Tag> = tagger.tag(TEXT).iter().map(|t| t.tag).collect();
    assert_eq!(
        tags,
        vec![
            Tag::Det,
            Tag::Nnp,
            Tag::Nnp,
            Tag::Nnp,
            Tag::Cc,
            Tag::Det,
            Tag::Nnp,
            Tag::Vbd,
            Tag::Det,
            Tag::Nn,
            Tag::Pp,
        ]
    );
}

#[test]
fn test_snapshot_preserves_tagging() {
    let dir = lexicon_dir();
    let from_text = tagger(dir.path(), TaggerConfig::default())
        .add_tags(TEXT, false)
        .unwrap();

    snapshot::install(dir.path(), None).unwrap();
    assert!(dir.path().join(SNAPSHOT_FILE).is_file());
    // Break the text tables so only the snapshot can produce the same result.
    fs::write(dir.path().join(WORDS_FILE), "").unwrap();

    let from_snapshot = tagger(dir.path(), TaggerConfig::default())
        .add_tags(TEXT, false)
        .unwrap();
    assert_eq!(from_text, from_snapshot);
}

#[test]
fn test_markup_parses_back_to_tokens() {
    let dir = lexicon_dir();
    let tagger = tagger(dir.path(), TaggerConfig::default());
    let tokens = tagger.tag(TEXT);

    for verbose in [false, true] {
        let rendered = tagger.add_tags(TEXT, verbose).unwrap();
        assert_eq!(markup::parse(&rendered), tokens);
    }
}

#[test]
fn test_proper_nouns_fold_acronyms() {
    let dir = lexicon_dir();
    let tagger = tagger(dir.path(), TaggerConfig::default());
    let markup = tagger.add_tags(TEXT, false).unwrap();

    let proper = tagger.get_proper_nouns(&markup).unwrap();
    assert_eq!(proper.len(), 1);
    assert_eq!(proper["British Broadcasting Corporation"], 2);
}

#[test]
fn test_max_noun_phrases() {
    let dir = lexicon_dir();
    let tagger = tagger(dir.path(), TaggerConfig::default());
    let markup = tagger.add_tags(TEXT, false).unwrap();

    let phrases = tagger.get_max_noun_phrases(&markup).unwrap();
    assert_eq!(phrases.len(), 3);
    assert_eq!(phrases["British Broadcasting Corporation"], 1);
    assert_eq!(phrases["BBC"], 1);
    assert_eq!(phrases["news"], 1);
}

#[test]
fn test_words_with_single_word_phrases() {
    let dir = lexicon_dir();
    let tagger = tagger(
        dir.path(),
        TaggerConfig::default().with_longest_noun_phrase(1),
    );

    let words = tagger.get_words(TEXT).unwrap();
    let mut keys: Vec<&str> = words.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["BBC", "British", "Broadcasting", "Corporation", "news"]
    );
    assert!(words.values().all(|&count| count == 1));
}

#[test]
fn test_sentences_keep_abbreviations() {
    let dir = lexicon_dir();
    let tagger = tagger(dir.path(), TaggerConfig::default());

    let sentences = tagger
        .get_sentences("Mr. Smith reported the news. The BBC reported.")
        .unwrap();
    assert_eq!(
        sentences,
        vec!["Mr. Smith reported the news .", "The BBC reported ."]
    );
}

#[test]
fn test_missing_tables_fall_back_to_nouns() {
    let dir = tempfile::tempdir().unwrap();
    let tagger = Tagger::from_dir(dir.path().join("missing"), TaggerConfig::default());

    assert!(tagger.tables().lexicon().is_empty());
    assert_eq!(
        tagger.get_readable("The news", false).unwrap(),
        "The/NN news/NN"
    );
}
