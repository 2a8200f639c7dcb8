//! Criterion benchmarks for the engtag tagger.
//!
//! Covers tokenization, single and batch tagging, and noun phrase
//! extraction over generated documents.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use engtag::analysis::tokenizer::{PunctTokenizer, Tokenizer};
use engtag::lexicon::{Lexicon, Tables, TransitionTable};
use engtag::tag::Tag;
use engtag::tagger::{Tagger, TaggerConfig};

const VOCABULARY: &[(&str, Tag)] = &[
    ("the", Tag::Det),
    ("a", Tag::Det),
    ("quick", Tag::Jj),
    ("lazy", Tag::Jj),
    ("brown", Tag::Jj),
    ("fox", Tag::Nn),
    ("dog", Tag::Nn),
    ("river", Tag::Nn),
    ("jumped", Tag::Vbd),
    ("slept", Tag::Vbd),
    ("over", Tag::In),
    ("near", Tag::In),
    ("and", Tag::Cc),
    ("London", Tag::Nnp),
    (".", Tag::Pp),
    (",", Tag::Ppc),
];

fn tables() -> Arc<Tables> {
    let mut lexicon = Lexicon::new();
    for (i, (word, tag)) in VOCABULARY.iter().enumerate() {
        lexicon.insert(*word, *tag, 10.0 + i as f64);
    }
    let mut transitions = TransitionTable::new();
    for (prev, next, p) in [
        (Tag::Pp, Tag::Det, 0.5),
        (Tag::Pp, Tag::Nnp, 0.2),
        (Tag::Det, Tag::Jj, 0.4),
        (Tag::Det, Tag::Nn, 0.5),
        (Tag::Jj, Tag::Jj, 0.2),
        (Tag::Jj, Tag::Nn, 0.7),
        (Tag::Nn, Tag::Vbd, 0.3),
        (Tag::Nn, Tag::Pp, 0.2),
        (Tag::Nn, Tag::Ppc, 0.1),
        (Tag::Nn, Tag::Cc, 0.1),
        (Tag::Nnp, Tag::Vbd, 0.3),
        (Tag::Vbd, Tag::In, 0.4),
        (Tag::In, Tag::Det, 0.6),
        (Tag::In, Tag::Nnp, 0.2),
        (Tag::Cc, Tag::Det, 0.5),
        (Tag::Ppc, Tag::Det, 0.4),
    ] {
        transitions.set(prev, next, p);
    }
    Arc::new(Tables::new(lexicon, transitions))
}

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let sentences = [
        "The quick brown fox jumped over the lazy dog.",
        "A dog slept near the river, and the fox jumped.",
        "London slept near a quick river.",
        "The lazy fox jumped over a brown dog near London.",
    ];
    (0..count)
        .map(|i| {
            let length = 5 + (i % 20);
            (0..length)
                .map(|j| sentences[(i + j) % sentences.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenization");
    let tokenizer = PunctTokenizer::new();
    let documents = generate_test_documents(100);

    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("tokenize_documents", |b| {
        b.iter(|| {
            for doc in &documents {
                black_box(tokenizer.tokenize(black_box(doc)));
            }
        })
    });
    group.finish();
}

fn bench_tagging(c: &mut Criterion) {
    let mut group = c.benchmark_group("tagging");
    let tagger = Tagger::new(tables(), TaggerConfig::default());
    let uncached = Tagger::new(tables(), TaggerConfig::default().with_cache_size(0));
    let documents = generate_test_documents(100);

    group.bench_function("tag_single_document", |b| {
        b.iter(|| black_box(tagger.tag(black_box(&documents[0]))))
    });

    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("tag_documents_uncached", |b| {
        b.iter(|| {
            for doc in &documents {
                black_box(uncached.tag(doc));
            }
        })
    });
    group.bench_function("tag_batch_documents", |b| {
        b.iter(|| black_box(tagger.tag_batch(black_box(&documents))))
    });
    group.finish();
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");
    let tagger = Tagger::new(tables(), TaggerConfig::default().with_stem(true));
    let markup: Vec<String> = generate_test_documents(50)
        .iter()
        .filter_map(|doc| tagger.add_tags(doc, false))
        .collect();

    group.throughput(Throughput::Elements(markup.len() as u64));
    group.bench_function("noun_phrases", |b| {
        b.iter(|| {
            for m in &markup {
                black_box(tagger.get_noun_phrases(m));
            }
        })
    });
    group.bench_function("max_noun_phrases", |b| {
        b.iter(|| {
            for m in &markup {
                black_box(tagger.get_max_noun_phrases(m));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_tokenization, bench_tagging, bench_extraction);
criterion_main!(benches);
