// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for chordspell
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Note parsing and chromatic distance
//! - Spelling patterns of different lengths
//! - Catalog builds across all chords
//! - Chord identification

use chordspell::{
    chromatic_distance, generate, identify, ChordCatalog, IntervalPattern, LetterRotation, Note,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const TONICS: [&str; 12] = ["C", "Db", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B"];

fn tonics() -> Vec<Note> {
    TONICS.iter().filter_map(|s| s.parse().ok()).collect()
}

/// Benchmark note parsing and distance (core note algebra)
fn bench_note_algebra(c: &mut Criterion) {
    c.bench_function("parse_note", |b| {
        b.iter(|| {
            for text in TONICS {
                black_box(black_box(text).parse::<Note>().ok());
            }
        })
    });

    let notes = tonics();
    c.bench_function("chromatic_distance", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for a in &notes {
                for other in &notes {
                    total += chromatic_distance(black_box(a), black_box(other)) as u32;
                }
            }
            black_box(total)
        })
    });
}

/// Benchmark spelling patterns of increasing length
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let tonic: Note = Note::new(chordspell::Letter::F, 1);

    let patterns = [
        ("triad", IntervalPattern::from_offsets(&[0, 4, 7]), LetterRotation::tertian()),
        ("sixth", IntervalPattern::from_offsets(&[0, -1, 4, -1, 7, 9]), LetterRotation::diatonic()),
        ("scale", IntervalPattern::from_offsets(&[0, 2, 4, 5, 7, 9, 11]), LetterRotation::diatonic()),
        ("thirteenth", IntervalPattern::from_offsets(&[0, 4, 7, 10, 14, 17, 21]), LetterRotation::tertian()),
    ];

    for (name, pattern, rotation) in patterns.iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(pattern, rotation),
            |b, &(pattern, rotation)| b.iter(|| generate(black_box(&tonic), pattern, rotation)),
        );
    }

    group.finish();
}

/// Benchmark building every catalog chord on every tonic
fn bench_catalog_build(c: &mut Criterion) {
    let catalog = ChordCatalog::builtin();
    let notes = tonics();

    c.bench_function("catalog_build_all", |b| {
        b.iter(|| {
            let mut count = 0usize;
            for tonic in &notes {
                for id in catalog.ids() {
                    if let Ok(chord) = catalog.build(black_box(tonic), id) {
                        count += chord.notes.len();
                    }
                }
            }
            black_box(count)
        })
    });
}

/// Benchmark chord identification for note sets of different sizes
fn bench_identify(c: &mut Criterion) {
    let catalog = ChordCatalog::builtin();
    let mut group = c.benchmark_group("identify");

    let sets: [&[&str]; 3] = [
        &["C", "E", "G"],
        &["C", "E", "G", "Bb"],
        &["C", "E", "G", "Bb", "D", "F", "A"],
    ];

    for set in sets.iter() {
        let notes: Vec<Note> = set.iter().filter_map(|s| s.parse().ok()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(notes.len()), &notes, |b, notes| {
            b.iter(|| identify(catalog, black_box(notes)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_note_algebra,
    bench_generate,
    bench_catalog_build,
    bench_identify,
);

criterion_main!(benches);
