//! Benchmarks for the hot inflection transforms

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use inflecto_core::Inflections;
use std::hint::black_box;

const NOUNS: &[&str] = &[
    "book", "person", "matrix", "analysis", "octopus", "sheep", "category", "knife",
];

const IDENTIFIERS: &[&str] = &[
    "data_mapper",
    "admin/user_session",
    "api_access_token",
    "very_long_identifier_with_many_words_in_it",
];

/// Plural and singular lookups against the default table
fn bench_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("number");
    let inflections = Inflections::english().unwrap();

    for noun in NOUNS {
        group.bench_with_input(BenchmarkId::new("pluralize", noun), noun, |b, noun| {
            b.iter(|| inflections.pluralize(black_box(noun)));
        });

        let plural = inflections.pluralize(noun);
        group.bench_with_input(BenchmarkId::new("singularize", noun), &plural, |b, plural| {
            b.iter(|| inflections.singularize(black_box(plural)));
        });
    }

    group.finish();
}

/// Casing with and without registered acronyms
fn bench_case(c: &mut Criterion) {
    let mut group = c.benchmark_group("case");
    let plain = Inflections::english().unwrap();
    let with_acronyms = Inflections::builder()
        .default_acronyms(true)
        .build()
        .unwrap();

    for (label, inflections) in [("plain", &plain), ("acronyms", &with_acronyms)] {
        for identifier in IDENTIFIERS {
            group.bench_with_input(
                BenchmarkId::new(format!("camelize/{label}"), identifier),
                identifier,
                |b, identifier| b.iter(|| inflections.camelize(black_box(identifier), true)),
            );

            let camel = inflections.camelize(identifier, true);
            group.bench_with_input(
                BenchmarkId::new(format!("underscore/{label}"), identifier),
                &camel,
                |b, camel| b.iter(|| inflections.underscore(black_box(camel))),
            );
        }
    }

    group.finish();
}

/// Building a table from its configuration
fn bench_table_construction(c: &mut Criterion) {
    c.bench_function("build_english_table", |b| {
        b.iter(|| Inflections::english().unwrap());
    });

    c.bench_function("build_custom_table", |b| {
        b.iter(|| {
            Inflections::builder()
                .plural("octopus", "octopi")
                .irregular("cow", "kine")
                .acronym("API")
                .build()
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_number, bench_case, bench_table_construction);
criterion_main!(benches);
