// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for tokenization, similarity scoring, and full
// ingredient checks in the halalscan-checker crate.

use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use halalscan_checker::{Catalog, IngredientChecker, parse_ingredients, ratio};

/// A realistic label: mostly halal ingredients with two haram ones.
const LABEL: &str = "Wheat flour, sugar, palm oil, cocoa powder (4%), glucose syrup, \
    gelatine, emulsifiers (soy lecithin; mono and diglycerides of fatty acids), \
    salt, raising agents (sodium bicarbonate, ammonium bicarbonate), flavouring, \
    rum, milk powder, whey powder, egg, barley malt extract\n";

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_parse_ingredients(c: &mut Criterion) {
    c.bench_function("parse_ingredients (label)", |b| {
        b.iter(|| black_box(parse_ingredients(black_box(LABEL))));
    });
}

/// Similarity scoring on short and long operands.
fn bench_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("ratio");
    group.bench_function("short", |b| {
        b.iter(|| black_box(ratio(black_box("gelatine"), black_box("gelatin"))));
    });
    group.bench_function("phrase", |b| {
        b.iter(|| {
            black_box(ratio(
                black_box("mono and diglycerides of fatty acids"),
                black_box("ethyl alcohol"),
            ))
        });
    });
    group.finish();
}

/// Full check against the bundled catalog, including phrase scanning.
fn bench_check_ingredients(c: &mut Criterion) {
    let checker = IngredientChecker::new(Arc::new(Catalog::initialize()));

    c.bench_function("check_ingredients (label, bundled catalog)", |b| {
        b.iter(|| black_box(checker.check_ingredients(black_box(LABEL))));
    });
}

criterion_group!(
    benches,
    bench_parse_ingredients,
    bench_ratio,
    bench_check_ingredients
);
criterion_main!(benches);
