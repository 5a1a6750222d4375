use criterion::{criterion_group, criterion_main, Criterion};

use scriptly_core::{IntensityLevel, ScriptRecord, Vocabulary};
use scriptly_ranking::RankingEngine;

/// Build a catalog of ~200 records, the upper end of expected size.
fn build_catalog() -> Vec<ScriptRecord> {
    let categories = ["sleep", "behavior", "meals", "transitions", "self_care"];
    let tag_pool = ["meltdown", "tantrum", "bedtime", "sleep", "routine", "emergency"];

    (0..200)
        .map(|i| ScriptRecord {
            id: format!("s{i}"),
            title: format!("Script {i} for {}", tag_pool[i % tag_pool.len()]),
            category: categories[i % categories.len()].to_string(),
            situation_trigger: (i % 3 == 0)
                .then(|| format!("Child is {} and refusing to cooperate", tag_pool[i % tag_pool.len()])),
            tags: vec![
                tag_pool[i % tag_pool.len()].to_string(),
                tag_pool[(i + 2) % tag_pool.len()].to_string(),
            ],
            execution_time_secs: (i % 4 != 0).then_some((i as u32 % 10) * 30),
            intensity: match i % 3 {
                0 => Some(IntensityLevel::Severe),
                1 => Some(IntensityLevel::Moderate),
                _ => None,
            },
            location_tags: (i % 5 == 0).then(|| vec!["public".to_string()]).unwrap_or_default(),
            works_in_public: Some(i % 2 == 0),
            caregiver_state_tags: (i % 7 == 0)
                .then(|| vec!["frustrated".to_string()])
                .unwrap_or_default(),
            emergency_suitable: Some(i % 6 == 0),
        })
        .collect()
}

fn bench_rank_context_heavy(c: &mut Criterion) {
    let vocab = Vocabulary::builtin();
    let engine = RankingEngine::new(&vocab);
    let catalog = build_catalog();

    c.bench_function("rank_200_records_context_heavy", |b| {
        b.iter(|| engine.rank("screaming meltdown in the store right now", &catalog));
    });
}

fn bench_rank_plain_keyword(c: &mut Criterion) {
    let vocab = Vocabulary::builtin();
    let engine = RankingEngine::new(&vocab);
    let catalog = build_catalog();

    c.bench_function("rank_200_records_plain_keyword", |b| {
        b.iter(|| engine.rank("bedtime", &catalog));
    });
}

fn bench_suggest(c: &mut Criterion) {
    let vocab = Vocabulary::builtin();
    let engine = RankingEngine::new(&vocab);

    c.bench_function("suggest_partial", |b| {
        b.iter(|| engine.suggest("won"));
    });
}

criterion_group!(
    benches,
    bench_rank_context_heavy,
    bench_rank_plain_keyword,
    bench_suggest
);
criterion_main!(benches);
