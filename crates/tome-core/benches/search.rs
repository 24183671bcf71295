//! Performance benchmarks for tome.
//!
//! Run with: cargo bench
//!
//! Target performance:
//! - Term normalization: < 5us
//! - Full search cascade on the demo catalog: < 1ms

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tome_core::recents::RecentSearches;
use tome_core::search::SearchEngine;
use tome_core::store::MemoryStore;
use tome_core::{mood, seed, text};

/// Benchmark term normalization.
fn bench_normalize(c: &mut Criterion) {
    let inputs = [
        ("plain", "The Name of the Wind"),
        ("diacritics", "Verité & réalité: après l'été"),
        ("messy", "  ROMANCE!!!  novels --- 2024  "),
    ];

    let mut group = c.benchmark_group("normalize");
    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
            b.iter(|| black_box(text::normalize(black_box(input))))
        });
    }
    group.finish();
}

/// Benchmark keyword expansion at the two extremes seen in practice:
/// a short title and a long description.
fn bench_keywords(c: &mut Criterion) {
    let inputs = [
        ("title", "The House in the Cerulean Sea"),
        (
            "description",
            "A groundbreaking narrative of humanity's creation and evolution \
             that explores the ways in which biology and history have defined \
             us and enhanced our understanding of what it means to be human",
        ),
    ];

    let mut group = c.benchmark_group("keywords");
    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
            b.iter(|| black_box(text::keywords(black_box(input))))
        });
    }
    group.finish();
}

/// Benchmark mood classification.
fn bench_classify(c: &mut Criterion) {
    let inputs = [
        ("first_row_hit", "happy books"),
        ("last_row_hit", "a good whodunit"),
        ("generic", "match my mood"),
        ("miss", "rust programming"),
    ];

    let mut group = c.benchmark_group("classify");
    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
            b.iter(|| black_box(mood::classify(black_box(input))))
        });
    }
    group.finish();
}

/// Benchmark the full cascade against the seeded demo catalog.
fn bench_search_cascade(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");

    let store = Arc::new(MemoryStore::new());
    rt.block_on(seed::seed(store.as_ref())).expect("seed demo data");
    let engine = SearchEngine::new(store, RecentSearches::new());

    let terms = [
        ("empty", ""),
        ("mood", "happy"),
        ("genre", "fantasy"),
        ("author", "jane austen"),
        ("fallback", "recommend me something"),
    ];

    let mut group = c.benchmark_group("search_cascade");
    for (name, term) in terms {
        group.bench_with_input(BenchmarkId::from_parameter(name), &term, |b, term| {
            b.iter(|| black_box(rt.block_on(engine.search(black_box(term)))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_keywords,
    bench_classify,
    bench_search_cascade,
);

criterion_main!(benches);
