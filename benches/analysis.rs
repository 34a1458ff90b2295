//! Benchmarks for chatpulse classification and aggregation.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench analysis -- classify`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatpulse::core::{StatsAggregator, analyze_str, to_json};
use chatpulse::parsing::classify_line;
use chatpulse::parsing::lexicon::{emoji_runs, word_tokens};

// =============================================================================
// Test Data Generators
// =============================================================================

const BODIES: &[&str] = &[
    "merhaba nasılsın bugün",
    "özür dilerim geç kaldım",
    "seni seviyorum canım ❤️",
    "toplantı yarın akşam 😂😂",
    "tamam evet görüşürüz",
    "film gerçekten güzeldi 🎉🚀",
];

fn generate_transcript(count: usize) -> String {
    let mut lines = Vec::with_capacity(count + count / 10);
    for i in 0..count {
        let author = if i % 3 == 0 { "Alice" } else { "Bob" };
        let day = (i / 1440) % 28 + 1;
        let hour = (i / 60) % 24;
        let minute = i % 60;
        lines.push(format!(
            "{:02}.01.2024, {:02}:{:02} - {}: {}",
            day,
            hour,
            minute,
            author,
            BODIES[i % BODIES.len()]
        ));
        if i % 10 == 0 {
            lines.push("continuation line without a header".to_string());
        }
    }
    lines.join("\n")
}

// =============================================================================
// Classification Benchmarks
// =============================================================================

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let lines = [
        "01.01.2024, 10:00 - Alice: merhaba nasılsın",
        "1.1.24 9:05 - Bob: selam",
        "Messages and calls are end-to-end encrypted.",
        "31.02.2024, 10:00 - Ghost: impossible date",
    ];

    for line in lines {
        group.bench_with_input(BenchmarkId::from_parameter(&line[..12]), line, |b, line| {
            b.iter(|| black_box(classify_line(black_box(line))));
        });
    }
    group.finish();
}

fn bench_lexicon(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexicon");
    let body = "Film gerçekten güzeldi, seni seviyorum 😂😂 🎉🚀 yarın görüşürüz";
    let lowered = body.to_lowercase();

    group.bench_function("word_tokens", |b| {
        b.iter(|| black_box(word_tokens(black_box(&lowered)).count()));
    });
    group.bench_function("emoji_runs", |b| {
        b.iter(|| black_box(emoji_runs(black_box(body)).count()));
    });
    group.finish();
}

// =============================================================================
// Aggregation Benchmarks
// =============================================================================

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let transcript = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &transcript,
            |b, transcript| {
                b.iter(|| black_box(analyze_str(black_box(transcript))));
            },
        );
    }
    group.finish();
}

fn bench_push_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_line");

    for size in [1_000_usize, 10_000] {
        let transcript = generate_transcript(size);
        let lines: Vec<&str> = transcript.lines().collect();
        group.throughput(Throughput::Elements(lines.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &lines, |b, lines| {
            b.iter(|| {
                let mut aggregator = StatsAggregator::default();
                for line in lines {
                    aggregator.push_line(black_box(line));
                }
                black_box(aggregator.records_seen())
            });
        });
    }
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    for size in [1_000_usize, 10_000, 50_000] {
        let transcript = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &transcript,
            |b, transcript| {
                b.iter(|| {
                    // Full pipeline: analyze -> serialize
                    let report = analyze_str(black_box(transcript));
                    let json = to_json(&report).unwrap();
                    black_box(json)
                });
            },
        );
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_classify,
    bench_lexicon,
    bench_analyze,
    bench_push_line,
    bench_full_pipeline,
);

criterion_main!(benches);
