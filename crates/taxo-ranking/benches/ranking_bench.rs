//! Pipeline throughput over a synthetic over-fetched candidate stream.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use taxo_core::category::RawCategory;
use taxo_core::config::{PolicyTable, RankingConfig};
use taxo_ranking::RankingEngine;
use test_fixtures::StubEngine;

const TOPICS: [&str; 7] = [
    "Arts", "Science", "Sports", "Computers", "Games", "Health", "Business",
];

fn synthetic_stream(len: usize) -> Vec<RawCategory> {
    (0..len)
        .map(|i| {
            let topic = TOPICS[i % TOPICS.len()];
            RawCategory::new(
                format!("Top/{topic}/Sub{}/Leaf{i}", i % 21),
                1.0 - i as f64 / len as f64,
            )
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let policy = PolicyTable::parse(
        "Top/Arts*Movies\nTop/Science*Physics\nTop/Sports*Soccer",
        vec!["Top/Games".to_string()],
    );
    let engine = RankingEngine::new(
        Arc::new(StubEngine::with_categories(synthetic_stream(7_000))),
        policy,
        RankingConfig::default(),
    );

    c.bench_function("classify_1000_slots", |b| {
        b.iter(|| engine.classify(black_box("benchmark document"), black_box(1_000)))
    });

    c.bench_function("classify_10_slots", |b| {
        b.iter(|| engine.classify(black_box("benchmark document"), black_box(10)))
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
