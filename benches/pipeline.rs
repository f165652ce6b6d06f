//! Benchmarks for the gltypes pipeline.

use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gltypes::{emit, validate, EmitOptions, Format, TypeRegistry};

// -- Generation benchmarks --

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    group.bench_function("build_registry", |b| {
        b.iter(|| TypeRegistry::webgl1().unwrap())
    });

    let registry = TypeRegistry::webgl1().unwrap();
    for format in [Format::Js, Format::Json] {
        let options = EmitOptions {
            format,
            validator: true,
        };
        group.bench_function(format!("emit_{}", format.extension()), |b| {
            b.iter(|| emit(black_box(&registry), &options).unwrap())
        });
    }

    group.finish();
}

// -- Validation benchmarks --

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    let registry = TypeRegistry::webgl1().unwrap();
    let conformant: HashMap<String, u32> = registry
        .descriptors()
        .map(|d| (d.name.to_string(), d.code.value()))
        .collect();
    let empty: HashMap<String, u32> = HashMap::new();

    group.bench_function("validate_conformant", |b| {
        b.iter(|| validate(black_box(&registry), black_box(&conformant)))
    });

    group.bench_function("validate_all_missing", |b| {
        b.iter(|| validate(black_box(&registry), black_box(&empty)))
    });

    group.finish();
}

criterion_group!(benches, bench_generation, bench_validation);
criterion_main!(benches);
