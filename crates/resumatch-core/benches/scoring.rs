use criterion::{black_box, criterion_group, criterion_main, Criterion};

use resumatch_core::catalog::SkillCatalog;
use resumatch_core::scoring::{missing_skills, score, verdict};
use resumatch_core::statistics::compute_session_stats;
use resumatch_core::session::AnalysisSession;

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    let catalog = SkillCatalog::builtin();
    let required = catalog.default_skills("Full Stack Developer");

    group.bench_function("full_match", |b| {
        b.iter(|| score(black_box(&required), black_box(&required)))
    });

    let partial: Vec<String> = required.iter().take(3).cloned().collect();
    group.bench_function("partial_match", |b| {
        b.iter(|| score(black_box(&partial), black_box(&required)))
    });

    group.bench_function("whole_vocabulary", |b| {
        b.iter(|| score(black_box(catalog.vocabulary()), black_box(&required)))
    });

    group.bench_function("missing_skills", |b| {
        b.iter(|| missing_skills(black_box(&required), black_box(&partial)))
    });

    group.bench_function("verdict", |b| b.iter(|| verdict(black_box(66.7))));

    group.finish();
}

fn bench_session_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_stats");
    let required = SkillCatalog::builtin().default_skills("Data Scientist");
    let mut session = AnalysisSession::new("Data Scientist", required);
    session.load_sample_data();
    let mut records = Vec::new();
    for _ in 0..100 {
        records.extend_from_slice(session.candidates());
    }

    group.bench_function("300_candidates", |b| {
        b.iter(|| compute_session_stats(black_box(&records), 10, 10))
    });

    group.finish();
}

criterion_group!(benches, bench_score, bench_session_stats);
criterion_main!(benches);
