//! Criterion benchmarks for the Cadence rhyme engine.
//!
//! Covers dictionary loading, phrase analysis, meter compilation and
//! rhyme sorting.

use cadence::dictionary::source::DictionarySource;
use cadence::index::syllabi::Syllabi;
use cadence::meter::cache::MeterCache;
use cadence::meter::matcher::MeterMatcher;
use cadence::ranking::sorter::sort_by_rhyme;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const ONSETS: [&str; 8] = ["B", "K", "D", "F", "HH", "M", "S", "T"];
const VOWELS: [&str; 6] = ["AE", "AH", "IY", "OW", "EH", "AY"];
const CODAS: [&str; 5] = ["T", "N", "D", "S", "K"];

/// Generate a synthetic dictionary of `count` one to four syllable words.
fn generate_dictionary(count: usize) -> String {
    let mut text = String::with_capacity(count * 32);
    for i in 0..count {
        let syllables = 1 + i % 4;
        let mut phonemes = Vec::with_capacity(syllables * 2 + 1);
        for s in 0..syllables {
            let stress = if s == (i / 4) % syllables { 1 } else { 0 };
            phonemes.push(ONSETS[(i + s * 3) % ONSETS.len()].to_string());
            phonemes.push(format!("{}{stress}", VOWELS[(i * 7 + s) % VOWELS.len()]));
        }
        phonemes.push(CODAS[(i / 3) % CODAS.len()].to_string());
        text.push_str(&format!("W{i}  {}\n", phonemes.join(" ")));
    }
    text
}

/// Generate phrases over the synthetic vocabulary, with some unknown words.
fn generate_phrases(count: usize, vocabulary: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let length = 3 + i % 6;
            (0..length)
                .map(|j| {
                    if (i + j) % 17 == 0 {
                        format!("unknown{j}")
                    } else {
                        format!("w{}", (i * 13 + j * 7) % vocabulary)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Benchmark dictionary loading.
fn bench_dictionary_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("dictionary");
    let text = generate_dictionary(10_000);

    group.throughput(Throughput::Elements(10_000));
    group.bench_function("load_10k_words", |b| {
        b.iter(|| {
            let syllabi = Syllabi::from_sources(&[DictionarySource::new("bench", text.as_str())]);
            black_box(syllabi)
        })
    });

    group.finish();
}

/// Benchmark phrase analysis, single and batched.
fn bench_phrase_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("phrase_analysis");

    let syllabi = Syllabi::from_sources(&[DictionarySource::new(
        "bench",
        generate_dictionary(10_000),
    )])
    .unwrap();
    let phrases = generate_phrases(1_000, 10_000);
    let meter = MeterMatcher::compile("0101$");

    group.bench_function("analyze_single_phrase", |b| {
        b.iter(|| black_box(syllabi.analyze(black_box(&phrases[0]), &meter)))
    });

    group.throughput(Throughput::Elements(1_000));
    group.bench_function("analyze_batch_sequential", |b| {
        b.iter(|| {
            for phrase in &phrases {
                black_box(syllabi.analyze(black_box(phrase), &meter));
            }
        })
    });

    group.bench_function("analyze_batch_parallel", |b| {
        b.iter(|| black_box(syllabi.analyze_all(black_box(&phrases), &meter)))
    });

    group.finish();
}

/// Benchmark meter compilation with and without the cache.
fn bench_meter_compilation(c: &mut Criterion) {
    let mut group = c.benchmark_group("meter");
    let specs = ["^0101", "01$", "^10101010$", "0110", "nonsense"];

    group.bench_function("compile_uncached", |b| {
        b.iter(|| {
            for spec in &specs {
                black_box(MeterMatcher::compile(black_box(spec)));
            }
        })
    });

    let cache = MeterCache::new();
    group.bench_function("compile_cached", |b| {
        b.iter(|| {
            for spec in &specs {
                black_box(cache.get(black_box(spec)));
            }
        })
    });

    group.finish();
}

/// Benchmark rhyme sorting.
fn bench_sort_by_rhyme(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking");

    let syllabi = Syllabi::from_sources(&[DictionarySource::new(
        "bench",
        generate_dictionary(10_000),
    )])
    .unwrap();
    let phrases = generate_phrases(1_000, 10_000);

    group.throughput(Throughput::Elements(1_000));
    group.bench_function("sort_by_rhyme", |b| {
        b.iter(|| black_box(sort_by_rhyme(&syllabi, black_box(&phrases))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_dictionary_load,
    bench_phrase_analysis,
    bench_meter_compilation,
    bench_sort_by_rhyme
);
criterion_main!(benches);
