use criterion::{black_box, criterion_group, criterion_main, Criterion};

use resumatch_core::catalog::SkillCatalog;
use resumatch_core::extractor::{extract, MatchMode, SkillExtractor};

const RESUME: &str = r#"
Jane Smith, Senior Data Engineer

Experience
- Built streaming pipelines in Python and SQL on AWS, deployed with Docker
  and Kubernetes through a GitLab CI/CD setup.
- Maintained Django and Flask REST API services backed by PostgreSQL.
- Trained PyTorch and TensorFlow models for demand forecasting; presented
  results with data visualization dashboards written in React.

Education
M.S. Statistics
"#;

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    let catalog = SkillCatalog::builtin();
    let vocabulary = catalog.vocabulary();
    let long_resume = RESUME.repeat(50);

    group.bench_function("free_function", |b| {
        b.iter(|| extract(black_box(RESUME), black_box(vocabulary)))
    });

    let substring = SkillExtractor::new(vocabulary, MatchMode::Substring);
    group.bench_function("substring", |b| {
        b.iter(|| substring.extract(black_box(RESUME)))
    });

    let bounded = SkillExtractor::new(vocabulary, MatchMode::WordBoundary);
    group.bench_function("word_boundary", |b| {
        b.iter(|| bounded.extract(black_box(RESUME)))
    });

    group.bench_function("word_boundary_long", |b| {
        b.iter(|| bounded.extract(black_box(&long_resume)))
    });

    group.bench_function("build_word_boundary", |b| {
        b.iter(|| SkillExtractor::new(black_box(vocabulary), MatchMode::WordBoundary))
    });

    group.finish();
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
